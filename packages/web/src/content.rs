//! Static copy of the home page: hero slides, community figures and the
//! seasonal guide.

pub struct Slide {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub image: &'static str,
}

pub const SLIDES: [Slide; 3] = [
    Slide {
        title: "Grow Together",
        subtitle: "Join our community of garden enthusiasts and share your knowledge",
        image: "https://images.pexels.com/photos/2132227/pexels-photo-2132227.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1",
    },
    Slide {
        title: "Urban Gardening Made Simple",
        subtitle: "Learn how to create beautiful gardens in small spaces",
        image: "https://images.pexels.com/photos/1029599/pexels-photo-1029599.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1",
    },
    Slide {
        title: "Your Green Journey Starts Here",
        subtitle: "Discover expert advice from our community of gardeners",
        image: "https://images.pexels.com/photos/2886937/pexels-photo-2886937.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1",
    },
];

/// Index of the slide after `current`, wrapping around.
pub fn next_slide(current: usize) -> usize {
    (current + 1) % SLIDES.len()
}

pub fn previous_slide(current: usize) -> usize {
    (current + SLIDES.len() - 1) % SLIDES.len()
}

pub struct Stat {
    pub label: &'static str,
    pub target: u32,
    pub step: u32,
}

pub const STATS: [Stat; 4] = [
    Stat { label: "Garden Enthusiasts", target: 10_000, step: 100 },
    Stat { label: "Gardening Tips Shared", target: 5_000, step: 50 },
    Stat { label: "Local Communities", target: 450, step: 5 },
    Stat { label: "Countries Represented", target: 75, step: 1 },
];

/// One animation tick: every counter moves one step towards its target.
pub fn tick(counts: &mut [u32; 4]) -> bool {
    let mut moving = false;
    for (count, stat) in counts.iter_mut().zip(STATS.iter()) {
        if *count < stat.target {
            *count = (*count + stat.step).min(stat.target);
            moving = true;
        }
    }
    moving
}

/// `10000` as `10,000`.
pub fn with_separators(value: u32) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Season {
    Spring,
    Summer,
    Fall,
    Winter,
}

pub struct SeasonGuide {
    pub title: &'static str,
    pub description: &'static str,
    pub tasks: [&'static str; 5],
    pub image: &'static str,
}

impl Season {
    pub const ALL: [Season; 4] = [Season::Spring, Season::Summer, Season::Fall, Season::Winter];

    pub fn label(&self) -> &'static str {
        match self {
            Season::Spring => "Spring",
            Season::Summer => "Summer",
            Season::Fall => "Fall",
            Season::Winter => "Winter",
        }
    }

    pub fn guide(&self) -> SeasonGuide {
        match self {
            Season::Spring => SeasonGuide {
                title: "Spring Gardening Guide",
                description: "As temperatures rise and frost recedes, it's time to wake up your garden from its winter slumber.",
                tasks: [
                    "Start seeds indoors for summer vegetables",
                    "Prune fruit trees and berry bushes before bud break",
                    "Divide and transplant perennials early in the season",
                    "Apply compost to garden beds as soil warms",
                    "Start monitoring for pests as they become active",
                ],
                image: "https://images.pexels.com/photos/7728050/pexels-photo-7728050.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1",
            },
            Season::Summer => SeasonGuide {
                title: "Summer Gardening Guide",
                description: "The growing season is in full swing! Focus on maintenance and harvesting your early crops.",
                tasks: [
                    "Implement water conservation techniques during heat waves",
                    "Mulch garden beds to retain moisture and prevent weeds",
                    "Harvest vegetables regularly to encourage production",
                    "Watch for signs of heat stress in plants",
                    "Start seeds for fall crops in late summer",
                ],
                image: "https://images.pexels.com/photos/1301856/pexels-photo-1301856.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1",
            },
            Season::Fall => SeasonGuide {
                title: "Fall Gardening Guide",
                description: "As summer heat fades, fall offers ideal conditions for planting and preparing for winter.",
                tasks: [
                    "Plant spring-flowering bulbs before first frost",
                    "Divide and transplant spring and summer blooming perennials",
                    "Harvest and preserve end-of-season vegetables",
                    "Clean up garden debris to prevent overwintering pests",
                    "Add compost to beds and mulch perennials for winter protection",
                ],
                image: "https://images.pexels.com/photos/1459495/pexels-photo-1459495.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1",
            },
            Season::Winter => SeasonGuide {
                title: "Winter Gardening Guide",
                description: "Even in the dormant season, there's plenty to do to prepare for a successful growing year ahead.",
                tasks: [
                    "Plan next year's garden and order seeds early",
                    "Inspect stored bulbs and tubers for damage",
                    "Prune dormant trees and shrubs on mild days",
                    "Maintain bird feeders to support wildlife",
                    "Start seeds indoors for early spring crops",
                ],
                image: "https://images.pexels.com/photos/688660/pexels-photo-688660.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1",
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slides_wrap() {
        assert_eq!(next_slide(2), 0);
        assert_eq!(previous_slide(0), 2);
        assert_eq!(previous_slide(next_slide(1)), 1);
    }

    #[test]
    fn test_counters_settle_on_targets() {
        let mut counts = [0; 4];
        let mut ticks = 0;
        while tick(&mut counts) {
            ticks += 1;
        }
        assert_eq!(counts, [10_000, 5_000, 450, 75]);
        assert_eq!(ticks, 100);
        assert!(!tick(&mut counts));
    }

    #[test]
    fn test_separators() {
        assert_eq!(with_separators(75), "75");
        assert_eq!(with_separators(5000), "5,000");
        assert_eq!(with_separators(1234567), "1,234,567");
    }
}
