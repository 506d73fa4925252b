//! Heart-rate bucket classification with advisory text.
//!
//! Resting-rate interpretation used by the dashboard:
//!
//! | Rate (bpm) | Category |
//! |------------|-------------|
//! | < 60       | Bradycardia |
//! | 60–100     | Normal      |
//! | > 100      | Tachycardia |

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeartRateCategory {
    Bradycardia,
    Normal,
    Tachycardia,
}

/// Classify a rate in beats per minute.
///
/// Total over all inputs: 0 and absurd values classify like any other,
/// there is no range validation at this layer.
pub fn classify(bpm: f64) -> HeartRateCategory {
    if bpm < 60.0 {
        HeartRateCategory::Bradycardia
    } else if bpm <= 100.0 {
        HeartRateCategory::Normal
    } else {
        HeartRateCategory::Tachycardia
    }
}

impl HeartRateCategory {
    /// Short result line shown next to the entered rate.
    pub fn label(&self) -> &'static str {
        match self {
            HeartRateCategory::Bradycardia => "Bradycardia (Heart rate is too slow)",
            HeartRateCategory::Normal => "Normal Heart Rate",
            HeartRateCategory::Tachycardia => "Tachycardia (Heart rate is too fast)",
        }
    }

    /// Fixed advisory block per category; never derived from the rate value.
    pub fn advisory(&self) -> &'static str {
        match self {
            HeartRateCategory::Bradycardia => {
                "Treatments and Precautions:\n\
                 - Medications: beta-blockers, calcium channel blockers, and antiarrhythmic drugs.\n\
                 - Pacemaker: a device implanted to regulate slow heart rhythms.\n\
                 - Lifestyle changes: avoid excessive alcohol and caffeine, maintain a healthy diet, and engage in regular physical activity.\n\
                 - Regular monitoring: keep track of your heart rate and consult your doctor regularly."
            }
            HeartRateCategory::Normal => {
                "General Precautions:\n\
                 - Maintain a heart-healthy diet rich in fruits, vegetables, and whole grains.\n\
                 - Avoid excessive caffeine, alcohol, and smoking.\n\
                 - Manage stress through meditation, yoga, or deep breathing exercises.\n\
                 - Engage in regular physical activity but avoid overexertion.\n\
                 - Monitor and control conditions such as high blood pressure, diabetes, and sleep apnea.\n\
                 - Follow prescribed medications and medical advice."
            }
            HeartRateCategory::Tachycardia => {
                "Treatments and Precautions:\n\
                 - Medications: beta-blockers, calcium channel blockers, and antiarrhythmic drugs.\n\
                 - Cardioversion: electrical shock therapy used to restore normal heart rhythm.\n\
                 - Catheter ablation: a minimally invasive procedure that destroys the heart tissue causing abnormal electrical signals.\n\
                 - Lifestyle changes: avoid triggers such as stress, caffeine, and alcohol.\n\
                 - Regular monitoring: keep track of your heart rate and consult your doctor regularly."
            }
        }
    }
}

impl fmt::Display for HeartRateCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundaries_follow_the_half_open_ranges() {
        assert_eq!(classify(59.0), HeartRateCategory::Bradycardia);
        assert_eq!(classify(60.0), HeartRateCategory::Normal);
        assert_eq!(classify(100.0), HeartRateCategory::Normal);
        assert_eq!(classify(101.0), HeartRateCategory::Tachycardia);
    }

    #[test]
    fn extreme_values_still_classify() {
        assert_eq!(classify(0.0), HeartRateCategory::Bradycardia);
        assert_eq!(classify(10_000.0), HeartRateCategory::Tachycardia);
    }

    #[test]
    fn advisory_is_category_specific() {
        assert!(HeartRateCategory::Bradycardia.advisory().contains("Pacemaker"));
        assert!(HeartRateCategory::Tachycardia.advisory().contains("Cardioversion"));
        assert!(HeartRateCategory::Normal.advisory().contains("General Precautions"));
    }

    #[test]
    fn display_matches_label() {
        assert_eq!(
            HeartRateCategory::Normal.to_string(),
            HeartRateCategory::Normal.label()
        );
    }
}
