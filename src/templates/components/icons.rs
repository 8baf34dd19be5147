use maud::{html, Markup};

/// The glyphs the listing page draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Share,
    MapMarker,
    Bed,
    Bath,
    Parking,
    Chair,
}

impl Icon {
    fn name(self) -> &'static str {
        match self {
            Icon::Share => "share",
            Icon::MapMarker => "map-marker",
            Icon::Bed => "bed",
            Icon::Bath => "bath",
            Icon::Parking => "parking",
            Icon::Chair => "chair",
        }
    }

    fn paths(self) -> &'static [&'static str] {
        match self {
            Icon::Share => &[
                "M3 12a3 3 0 1 0 6 0a3 3 0 1 0 -6 0",
                "M15 6a3 3 0 1 0 6 0a3 3 0 1 0 -6 0",
                "M15 18a3 3 0 1 0 6 0a3 3 0 1 0 -6 0",
                "M8.7 10.7l6.6 -3.4",
                "M8.7 13.3l6.6 3.4",
            ],
            Icon::MapMarker => &[
                "M9 11a3 3 0 1 0 6 0a3 3 0 0 0 -6 0",
                "M17.657 16.657l-4.243 4.243a2 2 0 0 1 -2.827 0l-4.244 -4.243a8 8 0 1 1 11.314 0z",
            ],
            Icon::Bed => &[
                "M3 7v11m0 -4h18m0 4v-8a2 2 0 0 0 -2 -2h-8v6",
                "M6 10a1 1 0 1 0 2 0a1 1 0 1 0 -2 0",
            ],
            Icon::Bath => &[
                "M4 12h16a1 1 0 0 1 1 1v3a4 4 0 0 1 -4 4h-10a4 4 0 0 1 -4 -4v-3a1 1 0 0 1 1 -1z",
                "M6 12v-7a2 2 0 0 1 2 -2h3v2.25",
                "M4 21l1 -1.5",
                "M20 21l-1 -1.5",
            ],
            Icon::Parking => &[
                "M4 6a2 2 0 0 1 2 -2h12a2 2 0 0 1 2 2v12a2 2 0 0 1 -2 2h-12a2 2 0 0 1 -2 -2z",
                "M9 16v-8h4a2 2 0 0 1 0 4h-4",
            ],
            Icon::Chair => &[
                "M5 11a2 2 0 0 1 2 2v2h10v-2a2 2 0 1 1 4 0v4a2 2 0 0 1 -2 2h-14a2 2 0 0 1 -2 -2v-4a2 2 0 0 1 2 -2z",
                "M5 11v-5a3 3 0 0 1 3 -3h8a3 3 0 0 1 3 3v5",
                "M6 19v2",
                "M18 19v2",
            ],
        }
    }
}

pub fn icon(glyph: Icon, class: &str) -> Markup {
    html! {
        svg
            xmlns="http://www.w3.org/2000/svg"
            width="24"
            height="24"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            class={ "icon icon-" (glyph.name()) " " (class) }
            aria-hidden="true"
        {
            @for d in glyph.paths() {
                path d=(d) {}
            }
        }
    }
}
