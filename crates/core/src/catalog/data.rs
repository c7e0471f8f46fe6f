//! Product records for the built-in collections.

use crate::types::{Price, Product, ProductId};

fn product(
    id: &str,
    name: &str,
    cents: u32,
    image: &str,
    category: &str,
    description: &str,
) -> Product {
    Product {
        id: ProductId::new(id),
        name: name.to_string(),
        price: Price::from_cents(cents),
        image: image.to_string(),
        category: category.to_string(),
        description: description.to_string(),
    }
}

/// Seafood: fish, shellfish and sea vegetables.
pub(super) fn marine_products() -> Vec<Product> {
    vec![
        product(
            "salmon-premium",
            "Premium Atlantic Salmon",
            2_499,
            "https://images.unsplash.com/photo-1583833008338-31a6657917ab?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&q=80",
            "Fish",
            "Premium quality Atlantic salmon, sustainably farmed with no antibiotics or hormones.",
        ),
        product(
            "seabass-fresh",
            "Fresh Sea Bass",
            1_899,
            "https://images.unsplash.com/photo-1559589332-a2c156ada4c1?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&q=80",
            "Fish",
            "Wild-caught sea bass known for its delicate flavor and firm texture.",
        ),
        product(
            "oysters-dozen",
            "Fresh Oysters",
            3_499,
            "https://images.unsplash.com/photo-1569513600253-e490a7e67e79?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&q=80",
            "Shellfish",
            "Premium fresh oysters harvested from pristine waters. Dozen pack.",
        ),
        product(
            "lobster-live",
            "Live Lobster",
            4_599,
            "https://images.unsplash.com/photo-1559574449-c474edf8f521?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&q=80",
            "Shellfish",
            "Fresh live lobster, perfect for special occasions and gourmet dining.",
        ),
        product(
            "shrimp-jumbo",
            "Jumbo Shrimp",
            2_199,
            "https://images.unsplash.com/photo-1565680018093-ebb6b9ab5460?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&q=80",
            "Shellfish",
            "Large, succulent shrimp perfect for grilling, sautéing, or adding to pasta dishes.",
        ),
        product(
            "seaweed-nori",
            "Dried Nori Seaweed",
            899,
            "https://images.unsplash.com/photo-1584314620467-8d36986b2daa?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&q=80",
            "Seaweed",
            "Premium dried nori seaweed, perfect for sushi making and as a nutritious snack.",
        ),
    ]
}

/// Aquaculture farming equipment.
pub(super) fn farming_products() -> Vec<Product> {
    vec![
        product(
            "water-quality-monitor",
            "Water Quality Monitor",
            14_999,
            "https://images.unsplash.com/photo-1543332143-4e8c27e3256f?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&q=80",
            "Monitoring",
            "Professional water quality monitoring device with pH, temperature, and dissolved oxygen sensors.",
        ),
        product(
            "automatic-feeder",
            "Automatic Fish Feeder",
            8_999,
            "https://images.unsplash.com/photo-1565027723308-0311dbee5b75?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&q=80",
            "Equipment",
            "Timer-controlled automatic fish feeder for home aquariums and small farming operations.",
        ),
        product(
            "water-pump",
            "High-Flow Water Pump",
            12_999,
            "https://images.unsplash.com/photo-1635731566822-0cf8095310e1?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&q=80",
            "Equipment",
            "Energy-efficient water pump with high flow rate, perfect for aquaculture systems.",
        ),
        product(
            "aquaponics-kit",
            "Complete Aquaponics Kit",
            34_999,
            "https://images.unsplash.com/photo-1582095133179-bfd08e2fc6b3?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&q=80",
            "Systems",
            "All-in-one aquaponics system for growing fish and plants together in a sustainable ecosystem.",
        ),
    ]
}

/// Eco-friendly farming supplies.
pub(super) fn sustainable_products() -> Vec<Product> {
    vec![
        product(
            "organic-fish-feed",
            "Organic Fish Feed",
            3_999,
            "https://images.unsplash.com/photo-1584017711689-8660dae904b5?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&q=80",
            "Feed",
            "100% organic fish feed made from sustainable ingredients, promoting healthy fish growth.",
        ),
        product(
            "floating-fish-habitat",
            "Floating Fish Habitat",
            24_999,
            "https://images.unsplash.com/photo-1596122787821-33ae219d6051?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&q=80",
            "Habitat",
            "Environmentally friendly floating habitats that mimic natural conditions for healthier fish.",
        ),
        product(
            "water-filtration-system",
            "Advanced Water Filtration System",
            59_999,
            "https://images.unsplash.com/photo-1585358682246-11495874ce0a?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&q=80",
            "Filtration",
            "Energy-efficient water filtration system that reduces waste and improves water quality.",
        ),
        product(
            "solar-powered-aerator",
            "Solar-Powered Aerator",
            17_999,
            "https://images.unsplash.com/photo-1586722392117-9d839fbaaf62?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&q=80",
            "Equipment",
            "Eco-friendly solar-powered aerator for maintaining optimal oxygen levels in fish ponds.",
        ),
    ]
}

/// Professional marine equipment.
pub(super) fn equipment_products() -> Vec<Product> {
    vec![
        product(
            "fishing-net",
            "Professional Fishing Net",
            7_999,
            "https://images.unsplash.com/photo-1545535408-8d170b04f7bf?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&q=80",
            "Fishing Gear",
            "High-quality fishing net for professional use, durable and designed for easy handling.",
        ),
        product(
            "underwater-drone",
            "Underwater Inspection Drone",
            129_999,
            "https://images.unsplash.com/photo-1589817327185-d6502a471945?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&q=80",
            "Technology",
            "Advanced underwater drone for monitoring fish health and farm conditions.",
        ),
        product(
            "protective-gear",
            "Marine Farming Protective Gear",
            19_999,
            "https://images.unsplash.com/photo-1588875173858-daab9e336a9f?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&q=80",
            "Safety",
            "Complete set of protective gear for marine farming operations, including waterproof clothing.",
        ),
        product(
            "feeding-system",
            "Automated Feeding System",
            49_999,
            "https://images.unsplash.com/photo-1584820308869-9ca923c10334?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&q=80",
            "Automation",
            "Programmable feeding system for large-scale fish farming, with remote control capabilities.",
        ),
    ]
}
