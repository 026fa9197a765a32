//! Axis scales: a zero-based linear scale for values and a categorical band
//! scale for labels.

/// Linear vertical scale, always starting at zero.
///
/// The tick step is the smallest 1/2/5 x 10^k step that covers the data
/// maximum in roughly five intervals; the top tick is the maximum rounded up
/// to a step multiple.
#[derive(Debug, Clone)]
pub struct LinearScale {
    step: f64,
    max_tick: f64,
    top: f32,
    bottom: f32,
}

impl LinearScale {
    pub fn zero_based(max_value: f64, top: f32, bottom: f32) -> Self {
        let (step, max_tick) = nice_bounds(max_value);
        Self {
            step,
            max_tick,
            top,
            bottom,
        }
    }

    /// Tick values from 0 up to and including the top tick.
    pub fn ticks(&self) -> Vec<f64> {
        let count = (self.max_tick / self.step).round() as usize;
        (0..=count).map(|i| i as f64 * self.step).collect()
    }

    /// Map a value to a vertical pixel position.
    pub fn y(&self, value: f64) -> f32 {
        let frac = (value / self.max_tick) as f32;
        self.bottom - frac * (self.bottom - self.top)
    }

    pub fn max_tick(&self) -> f64 {
        self.max_tick
    }

    pub fn step(&self) -> f64 {
        self.step
    }
}

fn nice_bounds(max_value: f64) -> (f64, f64) {
    if max_value <= 0.0 {
        return (1.0, 1.0);
    }
    let raw = max_value / 5.0;
    let magnitude = 10f64.powf(raw.log10().floor());
    let normalized = raw / magnitude;
    let step = if normalized <= 1.0 {
        magnitude
    } else if normalized <= 2.0 {
        2.0 * magnitude
    } else if normalized <= 5.0 {
        5.0 * magnitude
    } else {
        10.0 * magnitude
    };
    let max_tick = (max_value / step).ceil() * step;
    (step, max_tick)
}

/// Categorical horizontal scale.
///
/// With `offset` set, positions sit at band centers (bar charts); without
/// it, they span the full plot width edge to edge (line charts).
#[derive(Debug, Clone)]
pub struct CategoryScale {
    count: usize,
    left: f32,
    right: f32,
    offset: bool,
}

impl CategoryScale {
    pub fn new(count: usize, left: f32, right: f32, offset: bool) -> Self {
        Self {
            count,
            left,
            right,
            offset,
        }
    }

    /// Horizontal pixel position for category `index`.
    pub fn x(&self, index: usize) -> f32 {
        let width = self.right - self.left;
        if self.offset {
            let band = width / self.count.max(1) as f32;
            self.left + band * (index as f32 + 0.5)
        } else if self.count <= 1 {
            self.left + width / 2.0
        } else {
            self.left + width * index as f32 / (self.count - 1) as f32
        }
    }

    pub fn band_width(&self) -> f32 {
        (self.right - self.left) / self.count.max(1) as f32
    }

    pub fn count(&self) -> usize {
        self.count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_scale_starts_at_zero() {
        let scale = LinearScale::zero_based(90.0, 0.0, 300.0);
        let ticks = scale.ticks();
        assert_eq!(ticks[0], 0.0);
        assert!(scale.max_tick() >= 90.0);
    }

    #[test]
    fn test_linear_scale_step_is_nice() {
        for max in [3.0, 45.0, 90.0, 95.0, 820.0] {
            let scale = LinearScale::zero_based(max, 0.0, 100.0);
            let step = scale.step();
            let magnitude = 10f64.powf(step.log10().floor());
            let mantissa = step / magnitude;
            assert!(
                [1.0, 2.0, 5.0].iter().any(|m| (mantissa - m).abs() < 1e-9),
                "step {step} for max {max} is not a 1/2/5 multiple"
            );
            assert!(scale.max_tick() >= max);
        }
    }

    #[test]
    fn test_linear_scale_pixel_mapping() {
        let scale = LinearScale::zero_based(100.0, 10.0, 110.0);
        assert_eq!(scale.y(0.0), 110.0);
        assert_eq!(scale.y(scale.max_tick()), 10.0);
    }

    #[test]
    fn test_linear_scale_zero_maximum() {
        let scale = LinearScale::zero_based(0.0, 0.0, 100.0);
        assert_eq!(scale.ticks(), vec![0.0, 1.0]);
    }

    #[test]
    fn test_category_scale_offset_band_centers() {
        let scale = CategoryScale::new(3, 0.0, 300.0, true);
        assert_eq!(scale.x(0), 50.0);
        assert_eq!(scale.x(1), 150.0);
        assert_eq!(scale.x(2), 250.0);
        assert_eq!(scale.band_width(), 100.0);
    }

    #[test]
    fn test_category_scale_edge_to_edge() {
        let scale = CategoryScale::new(3, 0.0, 300.0, false);
        assert_eq!(scale.x(0), 0.0);
        assert_eq!(scale.x(1), 150.0);
        assert_eq!(scale.x(2), 300.0);
    }

    #[test]
    fn test_category_scale_single_label() {
        let scale = CategoryScale::new(1, 0.0, 100.0, false);
        assert_eq!(scale.x(0), 50.0);
    }
}
