#[derive(Debug, Clone, Default)]
pub struct TrackedInputs {
    pub cycle_duration: Option<u32>,
    pub last_period_duration: Option<u32>,
    pub sleep_duration: Option<f64>,
    pub sleep_quality: Option<String>,
    pub moods: Vec<String>,
    pub symptoms: Vec<String>,
}

const GENERAL_TIPS: [&str; 3] = [
    "Stay hydrated through the day, especially around your period.",
    "Regular movement, even a short walk, eases cramps and lifts mood.",
    "Log your symptoms daily so patterns show up early.",
];

/// Rules run in declaration order; a rule whose input was not tracked
/// contributes nothing. The general tips close out every list.
pub fn generate_tips(inputs: &TrackedInputs) -> Vec<String> {
    let mut tips = Vec::new();

    if let Some(days) = inputs.cycle_duration {
        if days < 21 {
            tips.push(
                "Your cycle is shorter than 21 days. Short cycles can point to hormonal \
                 imbalance, so bring it up with a gynecologist."
                    .to_string(),
            );
        } else if days > 35 {
            tips.push(
                "Your cycle is longer than 35 days. Long or irregular cycles are worth \
                 mentioning at your next consultation."
                    .to_string(),
            );
        } else {
            tips.push(
                "Your cycle length sits in the typical 21-35 day range. Keep tracking it \
                 to catch changes early."
                    .to_string(),
            );
        }
    }

    if let Some(days) = inputs.last_period_duration {
        if days > 7 {
            tips.push(
                "Periods longer than 7 days can deplete iron. Add iron-rich foods and \
                 tell your doctor about the duration."
                    .to_string(),
            );
        } else if days < 3 {
            tips.push(
                "A period shorter than 3 days can be normal, but track it for a few \
                 cycles and share the trend with your doctor."
                    .to_string(),
            );
        }
    }

    if let Some(hours) = inputs.sleep_duration {
        if hours < 7.0 {
            tips.push(
                "You are getting less than 7 hours of sleep. Aim for 7-9 hours to \
                 support hormonal balance."
                    .to_string(),
            );
        } else if hours > 9.0 {
            tips.push(
                "Regularly sleeping more than 9 hours can signal fatigue or low mood. \
                 Try a consistent wake time."
                    .to_string(),
            );
        } else {
            tips.push(
                "Your sleep duration looks healthy. A steady 7-9 hours supports your \
                 cycle."
                    .to_string(),
            );
        }
    }

    if let Some(quality) = inputs.sleep_quality.as_deref() {
        if quality == "Poor" || quality == "Fair" {
            tips.push(
                "Your sleep quality could improve. Wind down without screens and keep \
                 your room cool and dark."
                    .to_string(),
            );
        }
    }

    // One mood-swing tip even when both moods are present.
    if inputs.moods.iter().any(|mood| mood == "Sad" || mood == "Angry") {
        tips.push(
            "Mood swings are common across the cycle. Gentle exercise and journaling \
             help even them out."
                .to_string(),
        );
    }

    if inputs.moods.iter().any(|mood| mood == "Tired") {
        tips.push(
            "Persistent tiredness often traces back to sleep and iron levels. Plan a \
             lighter schedule around your period."
                .to_string(),
        );
    }

    tips.extend(GENERAL_TIPS.iter().map(|tip| tip.to_string()));
    tips
}
