use maud::{html, Markup};
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pagination {
    Bullets,
    ProgressBar,
}

impl Pagination {
    fn as_str(self) -> &'static str {
        match self {
            Pagination::Bullets => "bullets",
            Pagination::ProgressBar => "progressbar",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    Slide,
    Fade,
}

impl Effect {
    fn as_str(self) -> &'static str {
        match self {
            Effect::Slide => "slide",
            Effect::Fade => "fade",
        }
    }
}

/// Options handed to the client-side carousel widget as data attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarouselConfig {
    pub slides_per_view: u32,
    pub navigation: bool,
    pub pagination: Pagination,
    pub effect: Effect,
    /// `None` disables autoplay.
    pub autoplay: Option<Duration>,
    pub looped: bool,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            slides_per_view: 1,
            navigation: false,
            pagination: Pagination::Bullets,
            effect: Effect::Slide,
            autoplay: None,
            looped: false,
        }
    }
}

impl CarouselConfig {
    /// Listing photos: one at a time, arrows, progress bar, fading every 3s, wrapping.
    pub fn listing() -> Self {
        Self {
            navigation: true,
            pagination: Pagination::ProgressBar,
            effect: Effect::Fade,
            autoplay: Some(Duration::from_millis(3000)),
            looped: true,
            ..Self::default()
        }
    }
}

pub fn carousel(img_urls: &[String], config: &CarouselConfig) -> Markup {
    let autoplay_ms = config.autoplay.map(|d| d.as_millis() as u64);

    html! {
        div
            class="carousel relative"
            data-carousel
            data-slides-per-view=(config.slides_per_view)
            data-navigation=(flag(config.navigation))
            data-pagination=(config.pagination.as_str())
            data-effect=(config.effect.as_str())
            data-autoplay-delay=[autoplay_ms]
            data-loop=(flag(config.looped))
            // Manual navigation stops autoplay.
            data-autoplay-disable-on-interaction="true"
        {
            div class="carousel-track" {
                @for (index, url) in img_urls.iter().enumerate() {
                    div
                        class="carousel-slide relative w-full overflow-hidden h-[400px]"
                        data-index=(index)
                        style=(slide_background(url))
                    {}
                }
            }
            @if config.navigation {
                button type="button" class="carousel-prev" aria-label="Previous photo" { "‹" }
                button type="button" class="carousel-next" aria-label="Next photo" { "›" }
            }
            div class="carousel-pagination" data-type=(config.pagination.as_str()) {}
        }
    }
}

fn flag(on: bool) -> &'static str {
    if on {
        "true"
    } else {
        "false"
    }
}

fn slide_background(url: &str) -> String {
    // Keep the URL inside its CSS string.
    let quoted = url.replace('\\', "%5C").replace('"', "%22");
    format!("background: url(\"{quoted}\") center no-repeat; background-size: cover;")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn urls(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("https://img.example/{i}.jpg")).collect()
    }

    #[test]
    fn one_slide_per_url_in_order() {
        let urls = urls(4);
        let html = carousel(&urls, &CarouselConfig::listing()).into_string();

        assert_eq!(html.matches("carousel-slide ").count(), 4);

        let positions: Vec<usize> = urls.iter().map(|u| html.find(u.as_str()).unwrap()).collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn listing_config_reaches_the_widget() {
        let html = carousel(&urls(1), &CarouselConfig::listing()).into_string();

        assert!(html.contains(r#"data-slides-per-view="1""#));
        assert!(html.contains(r#"data-navigation="true""#));
        assert!(html.contains(r#"data-pagination="progressbar""#));
        assert!(html.contains(r#"data-effect="fade""#));
        assert!(html.contains(r#"data-autoplay-delay="3000""#));
        assert!(html.contains(r#"data-loop="true""#));
        assert!(html.contains("carousel-next"));
    }

    #[test]
    fn default_config_has_no_autoplay_or_arrows() {
        let html = carousel(&urls(2), &CarouselConfig::default()).into_string();

        assert!(!html.contains("data-autoplay-delay"));
        assert!(!html.contains("carousel-prev"));
    }

    #[test]
    fn quotes_in_urls_cannot_break_the_style() {
        let style = slide_background(r#"https://img.example/a"b.jpg"#);
        assert!(style.contains("a%22b.jpg"));
    }
}
