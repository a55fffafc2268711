//! Built-in weekly workout program.
//!
//! This is presentational content: the streak engine only consults
//! [`is_rest_day`]. Rest days are completed like any other day.

use crate::types::DayName;
use once_cell::sync::Lazy;

/// Days with no scheduled training
pub const REST_DAYS: [DayName; 2] = [DayName::Wednesday, DayName::Sunday];

/// Whether the given day is a rest day in the built-in program
pub fn is_rest_day(day: DayName) -> bool {
    REST_DAYS.contains(&day)
}

/// An easier/harder adjustment for an exercise: either a short coaching tip
/// or a full alternate exercise.
#[derive(Clone, Debug)]
pub enum Adjustment {
    Tip(&'static str),
    Alternate(ExerciseAlt),
}

/// An alternate exercise offered as an easier/harder variant
#[derive(Clone, Debug)]
pub struct ExerciseAlt {
    pub name: &'static str,
    pub prescription: &'static str,
    pub description: &'static str,
}

/// One exercise in a day's program
#[derive(Clone, Debug)]
pub struct Exercise {
    pub name: &'static str,
    /// Sets/reps or a duration, e.g. "3 × 10-15" or "2 min"
    pub prescription: &'static str,
    pub muscles: &'static str,
    pub description: &'static str,
    pub easier: Adjustment,
    pub harder: Adjustment,
}

/// A day's program
#[derive(Clone, Debug)]
pub struct WorkoutDay {
    pub day: DayName,
    pub title: &'static str,
    pub rest_day: bool,
    pub exercises: Vec<Exercise>,
}

/// The full built-in program, Monday first
pub fn weekly_program() -> &'static [WorkoutDay; 7] {
    &PROGRAM
}

/// The program for a single day
pub fn day_program(day: DayName) -> &'static WorkoutDay {
    // DayName discriminants follow weekly order, Monday = 0
    &PROGRAM[day as usize]
}

static PROGRAM: Lazy<[WorkoutDay; 7]> = Lazy::new(|| {
    [
        WorkoutDay {
            day: DayName::Monday,
            title: "Upper Body Push",
            rest_day: false,
            exercises: vec![
                Exercise {
                    name: "Warm-up: Arm Circles, Jumping Jacks",
                    prescription: "2 min",
                    muscles: "Shoulders, Cardio",
                    description: "Small arm circles forward growing bigger, then backward. \
                        Finish with jumping jacks to raise the heart rate.",
                    easier: Adjustment::Tip("Slower, smaller movements"),
                    harder: Adjustment::Tip("Increase speed and range of motion"),
                },
                Exercise {
                    name: "Wall Push-ups",
                    prescription: "3 × 10-15",
                    muscles: "Chest, Shoulders, Triceps",
                    description: "Hands on the wall at shoulder height, body straight, bend \
                        the elbows to lean in and push back out.",
                    easier: Adjustment::Alternate(ExerciseAlt {
                        name: "Close Wall Push-ups",
                        prescription: "3 × 12-15",
                        description: "Stand 6-12 inches from the wall for much less \
                            resistance; slow, controlled reps.",
                    }),
                    harder: Adjustment::Alternate(ExerciseAlt {
                        name: "Incline Push-ups (Counter)",
                        prescription: "3 × 8-12",
                        description: "Hands on a counter, feet stepped back so the body is \
                            at an angle; lower the chest to the surface and press up.",
                    }),
                },
                Exercise {
                    name: "Plank",
                    prescription: "3 × 20-30 sec",
                    muscles: "Core, Shoulders, Back",
                    description: "Forearms down, body in a straight line head to heels, \
                        breathing normally.",
                    easier: Adjustment::Alternate(ExerciseAlt {
                        name: "Knee Plank",
                        prescription: "3 × 20-30 sec",
                        description: "Same position with knees resting on the floor.",
                    }),
                    harder: Adjustment::Tip("Hold 45-60 seconds per set"),
                },
            ],
        },
        WorkoutDay {
            day: DayName::Tuesday,
            title: "Lower Body",
            rest_day: false,
            exercises: vec![
                Exercise {
                    name: "Warm-up: March in Place",
                    prescription: "2 min",
                    muscles: "Legs, Cardio",
                    description: "March with high knees, swinging the arms.",
                    easier: Adjustment::Tip("Lower the knees"),
                    harder: Adjustment::Tip("Jog in place instead"),
                },
                Exercise {
                    name: "Chair Squats",
                    prescription: "3 × 10-12",
                    muscles: "Quads, Glutes, Hamstrings",
                    description: "Stand in front of a chair, lower until you lightly touch \
                        the seat, then stand back up without using your hands.",
                    easier: Adjustment::Tip("Sit fully, pause, then stand"),
                    harder: Adjustment::Alternate(ExerciseAlt {
                        name: "Bodyweight Squats",
                        prescription: "3 × 12-15",
                        description: "Free-standing squats to parallel, no chair.",
                    }),
                },
                Exercise {
                    name: "Calf Raises",
                    prescription: "3 × 15",
                    muscles: "Calves",
                    description: "Rise onto the balls of the feet, pause, lower slowly. \
                        Hold a wall for balance if needed.",
                    easier: Adjustment::Tip("Hold on to a chair with both hands"),
                    harder: Adjustment::Tip("One leg at a time"),
                },
            ],
        },
        WorkoutDay {
            day: DayName::Wednesday,
            title: "Rest Day",
            rest_day: true,
            exercises: vec![Exercise {
                name: "Rest & Recovery",
                prescription: "All day",
                muscles: "Full Body Recovery",
                description: "Take the day off. Light stretching is okay if you feel like \
                    it; rest is when your muscles grow stronger.",
                easier: Adjustment::Tip("Complete rest, no activity"),
                harder: Adjustment::Tip("Do a gentle full-body stretch"),
            }],
        },
        WorkoutDay {
            day: DayName::Thursday,
            title: "Upper Body Pull + Core",
            rest_day: false,
            exercises: vec![
                Exercise {
                    name: "Warm-up: Shoulder Rolls",
                    prescription: "2 min",
                    muscles: "Shoulders, Upper Back",
                    description: "Big slow shoulder rolls forward then backward.",
                    easier: Adjustment::Tip("Smaller rolls"),
                    harder: Adjustment::Tip("Add arm swings across the chest"),
                },
                Exercise {
                    name: "Doorway Rows",
                    prescription: "3 × 10-12",
                    muscles: "Back, Biceps",
                    description: "Hold a door frame, lean back with straight arms, pull \
                        your chest to the frame by squeezing the shoulder blades.",
                    easier: Adjustment::Tip("Stand more upright for less lean"),
                    harder: Adjustment::Tip("Lean further back, slow the negative"),
                },
                Exercise {
                    name: "Dead Bug",
                    prescription: "3 × 8 each side",
                    muscles: "Core",
                    description: "On your back, arms up, knees bent 90°. Lower opposite \
                        arm and leg, keeping the lower back pressed down.",
                    easier: Adjustment::Tip("Move only the legs"),
                    harder: Adjustment::Tip("Hover the heel just off the floor"),
                },
            ],
        },
        WorkoutDay {
            day: DayName::Friday,
            title: "Cardio + Full Body",
            rest_day: false,
            exercises: vec![
                Exercise {
                    name: "Step Touches",
                    prescription: "3 min",
                    muscles: "Legs, Cardio",
                    description: "Step side to side, swinging the arms, staying light on \
                        the feet.",
                    easier: Adjustment::Tip("Slow the tempo"),
                    harder: Adjustment::Tip("Add a knee raise on each step"),
                },
                Exercise {
                    name: "Squat to Press (no weight)",
                    prescription: "3 × 10",
                    muscles: "Full Body",
                    description: "Squat down, then stand and press both arms overhead in \
                        one motion.",
                    easier: Adjustment::Tip("Shallow squat, skip the press"),
                    harder: Adjustment::Tip("Hold water bottles for light resistance"),
                },
            ],
        },
        WorkoutDay {
            day: DayName::Saturday,
            title: "Active Fun Day",
            rest_day: false,
            exercises: vec![Exercise {
                name: "Active Fun Activity",
                prescription: "15-20 min",
                muscles: "Full Body",
                description: "Do something fun and active: a video workout, sports, games, \
                    a brisk walk.",
                easier: Adjustment::Tip("Take it as a rest day"),
                harder: Adjustment::Tip("Do 30-45 minutes of activity"),
            }],
        },
        WorkoutDay {
            day: DayName::Sunday,
            title: "Rest Day",
            rest_day: true,
            exercises: vec![Exercise {
                name: "Rest & Recovery",
                prescription: "All day",
                muscles: "Full Body Recovery",
                description: "Full rest day. Relax, stretch if you want, and get ready \
                    for next week.",
                easier: Adjustment::Tip("Complete rest"),
                harder: Adjustment::Tip("Gentle stretching session"),
            }],
        },
    ]
});
