use rust_decimal::{prelude::ToPrimitive, Decimal};
use serde::Deserialize;
use tracing::warn;

pub type Hearts = u64;

/// Overrides below this are ignored and the budget is computed from the setting.
pub const MIN_CUSTOM_HEARTS: Hearts = 2;

/// How many hearts each participant can distribute, see [`available_hearts`].
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct HeartsSetting {
    pub base_numerator: u64,
    pub base_denominator: u64,
    pub max_ratio: Decimal,
    #[serde(default)]
    pub custom_hearts: Option<Hearts>,
}

impl HeartsSetting {
    #[inline]
    pub fn available_hearts(&self, n_proposals: usize) -> Hearts {
        available_hearts(
            n_proposals,
            self.base_numerator,
            self.base_denominator,
            self.max_ratio,
            self.custom_hearts,
        )
    }
}

/// Number of hearts a participant may distribute among `n_proposals` proposals.
///
/// `base_numerator / base_denominator` must be exactly `max_ratio`, the maximum
/// preference a participant can express for one proposal over another. The budget
/// is the smallest one keeping that bound for any allocation of the hearts:
/// `base_denominator * (n_proposals - 1)`. The comparison is done between the
/// closest `f64` values, so a repeating ratio such as `2/3` matches the `max_ratio`
/// `0.6666666666666666`.
///
/// A `custom_hearts` of at least [`MIN_CUSTOM_HEARTS`] is returned as is. With fewer
/// than two proposals, or an inconsistent ratio, no hearts are available and `0`
/// is returned.
pub fn available_hearts(
    n_proposals: usize,
    base_numerator: u64,
    base_denominator: u64,
    max_ratio: Decimal,
    custom_hearts: Option<Hearts>,
) -> Hearts {
    match custom_hearts {
        Some(hearts) if hearts >= MIN_CUSTOM_HEARTS => return hearts,
        Some(hearts) => warn!(hearts, "ignoring custom hearts below {}", MIN_CUSTOM_HEARTS),
        None => {}
    }

    if n_proposals < 2 {
        warn!(n_proposals, "at least two proposals are needed to distribute hearts");
        return 0;
    }

    let extra_proposals = n_proposals as u64 - 2;
    let scaled = |base: u64| {
        extra_proposals
            .checked_mul(base)
            .and_then(|extra| extra.checked_add(base))
    };
    let (max_votes, min_hearts) = match (scaled(base_numerator), scaled(base_denominator)) {
        (Some(max_votes), Some(min_hearts)) if min_hearts > 0 => (max_votes, min_hearts),
        _ => {
            warn!(
                n_proposals,
                base_numerator, base_denominator, "hearts budget cannot be computed"
            );
            return 0;
        }
    };

    let ratio = max_votes as f64 / min_hearts as f64;
    if max_ratio.to_f64() != Some(ratio) {
        warn!(
            %ratio,
            %max_ratio,
            "base numerator and denominator do not realize the max ratio"
        );
        return 0;
    }

    min_hearts
}
