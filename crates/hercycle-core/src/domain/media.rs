//! Illustration lookup for exercise cards.

use serde::Serialize;

/// Animation and still images for one exercise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ExerciseMedia {
    pub gif: Option<&'static str>,
    pub images: &'static [&'static str],
}

const WALKING: ExerciseMedia = ExerciseMedia {
    gif: None,
    images: &["images/walking.jpg"],
};

const BREATHING: ExerciseMedia = ExerciseMedia {
    gif: None,
    images: &["images/breathing.jpg"],
};

const MEDIA_TABLE: &[(&str, ExerciseMedia)] = &[
    (
        "Cat–Cow Pose",
        ExerciseMedia {
            gif: Some("images/cat_cow.gif"),
            images: &["images/cat_cow.jpg"],
        },
    ),
    (
        "Child’s Pose",
        ExerciseMedia {
            gif: Some("images/child's pose.gif"),
            images: &["images/child.jpg", "images/child_1.jpg"],
        },
    ),
    (
        "Bridge Pose",
        ExerciseMedia {
            gif: Some("images/bridge.gif"),
            images: &["images/bridge.jpg", "images/bridge_1.jpg"],
        },
    ),
    (
        "Seated Forward Bend",
        ExerciseMedia {
            gif: Some("images/Seated Forward Bend.gif"),
            images: &[
                "images/Seated Forward Bend.jpg",
                "images/Seated Forward Bend_1.jpg",
            ],
        },
    ),
    (
        "Bodyweight Squats",
        ExerciseMedia {
            gif: Some("images/Squats.gif"),
            images: &["images/Squats.jpg", "images/Squats_1.jpg"],
        },
    ),
    (
        "Forward Lunges",
        ExerciseMedia {
            gif: Some("images/Lunges.gif"),
            images: &["images/Lunges.jpg"],
        },
    ),
    (
        "Glute Bridge",
        ExerciseMedia {
            gif: Some("images/Glute Bridges.gif"),
            images: &["images/Glute Bridges.jpg"],
        },
    ),
    (
        "Butterfly Stretch",
        ExerciseMedia {
            gif: None,
            images: &["images/Butterfly Stretch.jpg"],
        },
    ),
    (
        "Pelvic Tilts",
        ExerciseMedia {
            gif: Some("images/pelvic_tilt.gif"),
            images: &[],
        },
    ),
    (
        "Cobra Pose",
        ExerciseMedia {
            gif: Some("images/Cobra-Pose.gif"),
            images: &["images/Cobra Pose.webp"],
        },
    ),
    (
        "Reclined Twist",
        ExerciseMedia {
            gif: Some("images/reclined twist.gif"),
            images: &["images/Reclined Twist.jpg"],
        },
    ),
    (
        "Plank",
        ExerciseMedia {
            gif: None,
            images: &["images/Plank.jpg"],
        },
    ),
    ("Brisk Walk / Light Dance", WALKING),
    ("Warm-up Walk", WALKING),
    ("Gentle Yoga / Slow Walk", WALKING),
    ("Walking / Zumba / Cycling / Dancing", WALKING),
    ("Deep Breathing", BREATHING),
    ("Deep Belly Breathing", BREATHING),
    ("Meditation / Mindful Breathing", BREATHING),
];

/// Look up media by exact exercise name (surrounding whitespace ignored).
#[must_use]
pub fn media_for(name: &str) -> Option<ExerciseMedia> {
    let name = name.trim();
    MEDIA_TABLE
        .iter()
        .find(|(key, _)| *key == name)
        .map(|(_, media)| *media)
}
