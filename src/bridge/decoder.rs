use crate::error::{Result, SimbridgeError};

/// Structured scenario parameters decoded from one genome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedScenarioParams {
    /// Per-segment turn angles in degrees, signed.
    pub angles: Vec<i32>,
    /// `None` iff zero segment lengths were decoded; never `Some(vec![])`.
    pub seg_lengths: Option<Vec<i32>>,
    pub perturbation_scale: i32,
    /// 1-based selector into the perturbation registry.
    pub perturbation_function: i32,
}

/// Decode a genome against its parallel variable-name sequence.
///
/// Pairs are scanned in order and classified by name prefix:
/// `perturbation_scale` and `perturbation_function` are terminal entries that
/// set their scalar and **stop the scan**; `angle` and `seg_length` entries
/// accumulate; unrecognized names are ignored.
///
/// The early stop means any angle or seg_length entry placed *after* a
/// terminal entry is silently dropped. Callers must therefore order all
/// angle/seg_length names before the scale/function names. Search problem
/// definitions tuned against this behavior depend on it, so it is pinned by
/// a regression test rather than widened to a full pass. The ordering is
/// validated up front by `config::ProblemConfig::validate`.
///
/// Values are truncated to integers. Non-finite values and a genome/name
/// length mismatch are decode errors carrying the offending position and
/// name.
pub fn decode(genome: &[f64], names: &[String]) -> Result<DecodedScenarioParams> {
    if genome.len() != names.len() {
        return Err(SimbridgeError::GenomeShape {
            genome_len: genome.len(),
            names_len: names.len(),
        });
    }

    let mut angles: Vec<i32> = Vec::new();
    let mut seg_lengths: Vec<i32> = Vec::new();
    let mut perturbation_scale: i32 = 0;
    let mut perturbation_function: i32 = 1;

    for (position, (name, &value)) in names.iter().zip(genome.iter()).enumerate() {
        if name.starts_with("perturbation_scale") {
            perturbation_scale = coerce_gene(position, name, value)?;
            break;
        } else if name.starts_with("perturbation_function") {
            perturbation_function = coerce_gene(position, name, value)?;
            break;
        } else if name.starts_with("angle") {
            angles.push(coerce_gene(position, name, value)?);
        } else if name.starts_with("seg_length") {
            seg_lengths.push(coerce_gene(position, name, value)?);
        }
    }

    Ok(DecodedScenarioParams {
        angles,
        seg_lengths: if seg_lengths.is_empty() {
            None
        } else {
            Some(seg_lengths)
        },
        perturbation_scale,
        perturbation_function,
    })
}

/// Truncating integer coercion; rejects NaN and infinities.
fn coerce_gene(position: usize, name: &str, value: f64) -> Result<i32> {
    if !value.is_finite() {
        return Err(SimbridgeError::MalformedGene {
            position,
            name: name.to_string(),
            value,
        });
    }
    Ok(value as i32)
}
