use crate::error::{Error, Result};
use crate::weights::WeightTable;

/// Planned output for one standard weight of a variable font
#[derive(Debug, Clone, PartialEq)]
pub struct WeightVariant {
    /// Canonical weight name
    pub name: String,
    /// Standard weight class before any offset
    pub base: u16,
    /// Resolved target on the wght axis, offset applied and clamped
    pub target: f64,
    /// Output filename stem for this variant
    pub file_stem: String,
}

/// Parse a weight offset such as `+10`, `-12.5`; rejects NaN and infinities
pub fn parse_weight_offset(value: &str) -> Result<f64> {
    let offset: f64 = value
        .trim()
        .parse()
        .map_err(|_| Error::Config(format!("invalid weight offset '{}'", value)))?;
    if !offset.is_finite() {
        return Err(Error::Config(format!("invalid weight offset '{}'", value)));
    }
    Ok(offset)
}

/// Format a weight for filenames without an unnecessary trailing `.0`
fn format_weight(weight: f64) -> String {
    if weight.fract() == 0.0 {
        format!("{}", weight as i64)
    } else {
        format!("{}", weight)
    }
}

/// Output basename (no extension) for one font/weight pair.
///
/// With a zero offset: `<stem>-<WeightName>`; otherwise the resolved weight
/// is appended so offset runs stay distinguishable.
pub fn compose_weight_basename(stem: &str, weight_name: &str, resolved: f64, offset: f64) -> String {
    if offset == 0.0 {
        format!("{}-{}", stem, weight_name)
    } else {
        format!("{}-{}-{}", stem, weight_name, format_weight(resolved))
    }
}

/// Plan one output per standard weight for a single variable font.
///
/// Targets are clamped into the font's supported `wght` axis range when the
/// caller knows it, so every standard weight yields an output.
pub fn plan_weight_variants(
    table: &WeightTable,
    stem: &str,
    axis_range: Option<(f64, f64)>,
    offset: f64,
) -> Vec<WeightVariant> {
    let mut variants = Vec::new();
    for (base, name) in table.standard_weights() {
        let mut target = f64::from(base) + offset;
        if let Some((min, max)) = axis_range {
            if target < min {
                target = min;
            } else if target > max {
                target = max;
            }
        }
        let file_stem = compose_weight_basename(stem, &name, target, offset);
        variants.push(WeightVariant {
            name,
            base,
            target,
            file_stem,
        });
    }
    variants
}
