use super::{Impact, Tip, TipCategory};

/// Built-in tips in declaration order. Selection preserves this order apart
/// from the shower promotion.
pub const TIP_CATALOG: [Tip; 8] = [
    Tip {
        title: "Shorter Showers",
        description: "Reduce shower time by 2 minutes to save up to 10 liters of water per shower.",
        impact: Impact::High,
        category: TipCategory::Water,
    },
    Tip {
        title: "Cold Water Laundry",
        description: "Washing clothes in cold water can reduce energy use by up to 90% per load.",
        impact: Impact::High,
        category: TipCategory::Energy,
    },
    Tip {
        title: "LED Light Bulbs",
        description: "Switch to LED bulbs to use 75% less energy and last 25 times longer.",
        impact: Impact::Medium,
        category: TipCategory::Energy,
    },
    Tip {
        title: "Fix Leaky Faucets",
        description: "A dripping faucet can waste up to 15 liters of water per day.",
        impact: Impact::High,
        category: TipCategory::Water,
    },
    Tip {
        title: "Unplug Devices",
        description: "Unplug chargers and devices when not in use to prevent phantom energy drain.",
        impact: Impact::Medium,
        category: TipCategory::Energy,
    },
    Tip {
        title: "Full Loads Only",
        description: "Only run dishwashers and washing machines with full loads to maximize efficiency.",
        impact: Impact::Medium,
        category: TipCategory::Water,
    },
    Tip {
        title: "Smart Thermostat",
        description: "Program your thermostat to reduce heating/cooling when you're away.",
        impact: Impact::High,
        category: TipCategory::Energy,
    },
    Tip {
        title: "Low-Flow Fixtures",
        description: "Install low-flow showerheads and faucets to reduce water use by 30-50%.",
        impact: Impact::High,
        category: TipCategory::Water,
    },
];
