//! Built-in trip catalog
//!
//! Used when the daemon's config does not declare its own `[[trips]]`.

use crate::models::{Trip, TripStats};

/// Placeholder photo for a trip, keyed by a stable seed
fn image_url(seed: &str) -> String {
    format!("https://picsum.photos/seed/{}/800/600", seed)
}

/// The built-in trips, in display order
pub fn default_trips() -> Vec<Trip> {
    vec![
        Trip {
            id: "1".into(),
            name: "Monte Rosa Massif".into(),
            date: "Aug 2025".into(),
            location: "Italy/Switzerland".into(),
            elevation: "4,634m".into(),
            image: image_url("monterosa"),
            description: "A multi-day traverse across the second highest massif in the Alps. Challenging glacier travel and high altitude camps."
                .into(),
            stats: TripStats {
                duration: "3 Days".into(),
                distance: "24km".into(),
                gain: "2100m".into(),
            },
        },
        Trip {
            id: "2".into(),
            name: "Gran Paradiso".into(),
            date: "Jul 2025".into(),
            location: "Aosta Valley".into(),
            elevation: "4,061m".into(),
            image: image_url("granparadiso"),
            description: "The only 4000m peak entirely within Italy. A classic snow climb with a rocky summit block."
                .into(),
            stats: TripStats {
                duration: "2 Days".into(),
                distance: "16km".into(),
                gain: "1800m".into(),
            },
        },
        Trip {
            id: "3".into(),
            name: "Weissmies Traverse".into(),
            date: "Jun 2025".into(),
            location: "Saas-Fee".into(),
            elevation: "4,017m".into(),
            image: image_url("weissmies"),
            description: "A beautiful traverse ascending the SE ridge and descending the normal route. Spectacular views of the Mischabel group."
                .into(),
            stats: TripStats {
                duration: "1 Day".into(),
                distance: "12km".into(),
                gain: "1100m".into(),
            },
        },
        Trip {
            id: "4".into(),
            name: "Dom des Mischabel".into(),
            date: "Sep 2024".into(),
            location: "Randa".into(),
            elevation: "4,545m".into(),
            image: image_url("dom"),
            description: "The highest mountain entirely in Switzerland. A long, demanding ascent requiring excellent fitness."
                .into(),
            stats: TripStats {
                duration: "2 Days".into(),
                distance: "28km".into(),
                gain: "3100m".into(),
            },
        },
        Trip {
            id: "5".into(),
            name: "Piz Bernina".into(),
            date: "Aug 2024".into(),
            location: "Engadin".into(),
            elevation: "4,049m".into(),
            image: image_url("bernina"),
            description: "The most easterly 4000er in the Alps. Famous for the Biancograt, a stunning white ridge."
                .into(),
            stats: TripStats {
                duration: "3 Days".into(),
                distance: "22km".into(),
                gain: "2400m".into(),
            },
        },
        Trip {
            id: "6".into(),
            name: "Dent Blanche".into(),
            date: "Jul 2024".into(),
            location: "Val d'Hérens".into(),
            elevation: "4,357m".into(),
            image: image_url("dentblanche"),
            description: "A perfect pyramid of rock and ice. One of the most difficult 4000m peaks in the Alps."
                .into(),
            stats: TripStats {
                duration: "2 Days".into(),
                distance: "18km".into(),
                gain: "1900m".into(),
            },
        },
    ]
}
