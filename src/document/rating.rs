use super::media::MediaError;

/// Accumulated rating state of one document.
///
/// A single owned counter pair. Embedders that rate from several threads
/// must guard the owning document with a mutex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RatingTally {
    sum: u64,
    count: u32,
}

impl RatingTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restore a tally from stored totals.
    ///
    /// The totals must be reachable through `record`: no sum without a
    /// rating, and no more than `i32::MAX` per rating.
    pub fn from_parts(sum: u64, count: u32) -> Result<Self, MediaError> {
        let max_sum = u64::from(count) * i32::MAX as u64;
        if sum > max_sum {
            return Err(MediaError::InvalidArgument(format!(
                "rating sum {sum} is unreachable with {count} ratings"
            )));
        }
        Ok(Self { sum, count })
    }

    /// Record one score. Negative scores are rejected and leave the tally
    /// untouched.
    pub fn record(&mut self, score: i32) -> Result<(), MediaError> {
        let score = u64::try_from(score).map_err(|_| {
            MediaError::InvalidArgument(format!("rating score must be non-negative, got {score}"))
        })?;
        self.sum += score;
        self.count += 1;
        Ok(())
    }

    pub fn sum(&self) -> u64 {
        self.sum
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    /// Mean of all recorded scores, exactly 0.0 when nothing was recorded.
    pub fn average(&self) -> f64 {
        if self.count == 0 {
            return 0.0;
        }
        self.sum as f64 / self.count as f64
    }

    /// Average with exactly two decimals, rounded half-to-even.
    ///
    /// Computed from the integer sum and count so that ties such as
    /// 0.125 round on the exact value and not on its binary approximation.
    pub fn format_average(&self) -> String {
        if self.count == 0 {
            return "0.00".to_string();
        }
        let scaled = u128::from(self.sum) * 100;
        let count = u128::from(self.count);
        let mut hundredths = scaled / count;
        let remainder = scaled % count;

        match (remainder * 2).cmp(&count) {
            std::cmp::Ordering::Greater => hundredths += 1,
            std::cmp::Ordering::Equal if hundredths % 2 == 1 => hundredths += 1,
            _ => {}
        }

        format!("{}.{:02}", hundredths / 100, hundredths % 100)
    }
}
