use serde::{Deserialize, Serialize};

use crate::{
    error::DirectionsError,
    query::{QueryItem, render_finite},
};

pub const DEFAULT_WALKING_SPEED: f64 = 1.42; // m/s

const ALLEY_BIAS: &str = "alley_bias";
const WALKWAY_BIAS: &str = "walkway_bias";
const WALKING_SPEED: &str = "walking_speed";

/// Pedestrian tuning knobs of a route request.
///
/// Every field always holds a finite number: the constructor, the setters
/// and deserialization all reject NaN and infinities.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawWalkingOptions")]
pub struct WalkingOptions {
    alley_bias: f64,
    walkway_bias: f64,
    walking_speed: f64, // m/s
}

#[derive(Deserialize)]
struct RawWalkingOptions {
    #[serde(default)]
    alley_bias: f64,
    #[serde(default)]
    walkway_bias: f64,
    #[serde(default = "default_walking_speed")]
    walking_speed: f64,
}

fn default_walking_speed() -> f64 {
    DEFAULT_WALKING_SPEED
}

impl TryFrom<RawWalkingOptions> for WalkingOptions {
    type Error = DirectionsError;

    fn try_from(raw: RawWalkingOptions) -> Result<Self, Self::Error> {
        WalkingOptions::new(raw.alley_bias, raw.walkway_bias, raw.walking_speed)
    }
}

impl Default for WalkingOptions {
    fn default() -> Self {
        WalkingOptions {
            alley_bias: 0.0,
            walkway_bias: 0.0,
            walking_speed: DEFAULT_WALKING_SPEED,
        }
    }
}

fn finite(field: &'static str, value: f64) -> Result<f64, DirectionsError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(DirectionsError::InvalidValue { field, value })
    }
}

impl WalkingOptions {
    pub fn new(
        alley_bias: f64,
        walkway_bias: f64,
        walking_speed: f64,
    ) -> Result<Self, DirectionsError> {
        Ok(WalkingOptions {
            alley_bias: finite(ALLEY_BIAS, alley_bias)?,
            walkway_bias: finite(WALKWAY_BIAS, walkway_bias)?,
            walking_speed: finite(WALKING_SPEED, walking_speed)?,
        })
    }

    pub fn alley_bias(&self) -> f64 {
        self.alley_bias
    }

    pub fn walkway_bias(&self) -> f64 {
        self.walkway_bias
    }

    pub fn walking_speed(&self) -> f64 {
        self.walking_speed
    }

    pub fn set_alley_bias(&mut self, value: f64) -> Result<(), DirectionsError> {
        self.alley_bias = finite(ALLEY_BIAS, value)?;
        Ok(())
    }

    pub fn set_walkway_bias(&mut self, value: f64) -> Result<(), DirectionsError> {
        self.walkway_bias = finite(WALKWAY_BIAS, value)?;
        Ok(())
    }

    pub fn set_walking_speed(&mut self, value: f64) -> Result<(), DirectionsError> {
        self.walking_speed = finite(WALKING_SPEED, value)?;
        Ok(())
    }

    pub fn with_alley_bias(mut self, value: f64) -> Result<Self, DirectionsError> {
        self.set_alley_bias(value)?;
        Ok(self)
    }

    pub fn with_walkway_bias(mut self, value: f64) -> Result<Self, DirectionsError> {
        self.set_walkway_bias(value)?;
        Ok(self)
    }

    pub fn with_walking_speed(mut self, value: f64) -> Result<Self, DirectionsError> {
        self.set_walking_speed(value)?;
        Ok(self)
    }

    /// One item per field, in declaration order, defaults included.
    pub fn query_items(&self) -> Vec<QueryItem> {
        [
            (ALLEY_BIAS, self.alley_bias),
            (WALKWAY_BIAS, self.walkway_bias),
            (WALKING_SPEED, self.walking_speed),
        ]
        .into_iter()
        .map(|(name, value)| QueryItem::new(name, render_finite(value)))
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::find_value;

    #[test]
    fn defaults_serialize() {
        let items = WalkingOptions::default().query_items();

        assert_eq!(find_value(&items, "alley_bias"), Some("0.0"));
        assert_eq!(find_value(&items, "walkway_bias"), Some("0.0"));
        assert_eq!(find_value(&items, "walking_speed"), Some("1.42"));
    }

    #[test]
    fn mutated_values_serialize() {
        let mut options = WalkingOptions::default();
        options.set_alley_bias(0.4).unwrap();
        options.set_walkway_bias(0.5).unwrap();
        options.set_walking_speed(5.2).unwrap();

        let items = options.query_items();
        assert_eq!(find_value(&items, "alley_bias"), Some("0.4"));
        assert_eq!(find_value(&items, "walkway_bias"), Some("0.5"));
        assert_eq!(find_value(&items, "walking_speed"), Some("5.2"));
    }

    #[test]
    fn order_is_stable_and_idempotent() {
        let options = WalkingOptions::new(-1.0, 1.0, 2.5).unwrap();
        let first = options.query_items();
        let second = options.query_items();

        assert_eq!(first, second);
        let names: Vec<&str> = first.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, ["alley_bias", "walkway_bias", "walking_speed"]);
    }

    #[test]
    fn rejects_non_finite() {
        let mut options = WalkingOptions::default();
        let err = options.set_walking_speed(f64::NAN).unwrap_err();
        assert!(matches!(
            err,
            DirectionsError::InvalidValue {
                field: "walking_speed",
                ..
            }
        ));
        assert_eq!(options.walking_speed(), DEFAULT_WALKING_SPEED);

        assert!(WalkingOptions::new(f64::INFINITY, 0.0, 1.0).is_err());
        assert!(
            WalkingOptions::default()
                .with_walkway_bias(f64::NEG_INFINITY)
                .is_err()
        );
    }

    #[test]
    fn builder_chain() {
        let options = WalkingOptions::default()
            .with_alley_bias(-0.5)
            .and_then(|o| o.with_walking_speed(1.0))
            .unwrap();
        assert_eq!(options.alley_bias(), -0.5);
        assert_eq!(options.walkway_bias(), 0.0);
        assert_eq!(options.walking_speed(), 1.0);
        assert_eq!(
            find_value(&options.query_items(), "walking_speed"),
            Some("1.0")
        );
    }

    #[test]
    fn deserializes_with_defaults() {
        let options: WalkingOptions = serde_yml::from_str("alley_bias: 0.25\n").unwrap();
        assert_eq!(options.alley_bias(), 0.25);
        assert_eq!(options.walkway_bias(), 0.0);
        assert_eq!(options.walking_speed(), DEFAULT_WALKING_SPEED);

        let invalid: Result<WalkingOptions, _> = serde_yml::from_str("walking_speed: .nan\n");
        assert!(invalid.is_err());
    }
}
