use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{RadarError, RadarResult};

/// Presentation metadata attached to one data series.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeriesMeta {
    /// Stroke/fill color applied to the series' shape path.
    pub color: Option<String>,
    /// Extra class name merged into the series' primitives.
    pub class: Option<String>,
    /// When set, the shape path acts as a clip mask for this image instead
    /// of being filled directly.
    pub image: Option<String>,
}

/// One dataset plotted as a closed shape across all axes.
///
/// `data` maps axis key to a value conventionally in `[0, 1]` (not
/// hard-enforced); every in-use axis key must map to a finite number or the
/// series is rejected at render time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataSeries {
    pub data: IndexMap<String, f64>,
    #[serde(default)]
    pub meta: SeriesMeta,
}

impl DataSeries {
    #[must_use]
    pub fn new(data: IndexMap<String, f64>) -> Self {
        Self {
            data,
            meta: SeriesMeta::default(),
        }
    }

    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.meta.color = Some(color.into());
        self
    }

    #[must_use]
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.meta.class = Some(class.into());
        self
    }

    #[must_use]
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.meta.image = Some(image.into());
        self
    }

    /// Looks up this series' value for an axis key.
    ///
    /// A missing key or a non-finite value makes the whole series invalid;
    /// `series_index` identifies it in the resulting error.
    pub fn axis_value(&self, key: &str, series_index: usize) -> RadarResult<f64> {
        match self.data.get(key) {
            Some(value) if value.is_finite() => Ok(*value),
            _ => Err(RadarError::InvalidSeries {
                index: series_index,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::DataSeries;
    use crate::error::RadarError;
    use indexmap::IndexMap;

    #[test]
    fn axis_value_returns_finite_entries() {
        let series = DataSeries::new(IndexMap::from([("a".to_owned(), 0.25)]));
        assert_eq!(series.axis_value("a", 0).expect("value"), 0.25);
    }

    #[test]
    fn axis_value_rejects_missing_and_non_finite() {
        let series = DataSeries::new(IndexMap::from([("a".to_owned(), f64::INFINITY)]));
        assert!(matches!(
            series.axis_value("a", 1),
            Err(RadarError::InvalidSeries { index: 1 })
        ));
        assert!(series.axis_value("b", 0).is_err());
    }
}
