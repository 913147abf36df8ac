use crate::model::ids::ModuleId;

/// Percent-complete per module, 0..=100.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProgressMap {
    percent: [u8; 4],
}

impl ProgressMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self, module: ModuleId) -> u8 {
        self.percent[module.index()]
    }

    /// Store the latest percentage reported by a module run.
    pub fn set(&mut self, module: ModuleId, percent: u8) {
        self.percent[module.index()] = percent.min(100);
    }

    pub fn iter(&self) -> impl Iterator<Item = (ModuleId, u8)> + '_ {
        ModuleId::ALL.into_iter().map(|module| (module, self.get(module)))
    }

    pub fn reset(&mut self) {
        self.percent = [0; 4];
    }
}

/// `round(100 * completed / total)` with halves rounded up; 0 for an empty module.
#[must_use]
pub fn progress_percent(completed: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    let completed = completed.min(total);
    let rounded = (200 * completed + total) / (2 * total);
    u8::try_from(rounded).unwrap_or(100)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_rounds_like_math_round() {
        assert_eq!(progress_percent(0, 9), 0);
        assert_eq!(progress_percent(1, 3), 33);
        assert_eq!(progress_percent(2, 3), 67);
        assert_eq!(progress_percent(1, 8), 13);
        assert_eq!(progress_percent(9, 9), 100);
    }

    #[test]
    fn percent_is_monotone_in_completed() {
        let total = 11;
        let mut last = 0;
        for done in 0..=total {
            let pct = progress_percent(done, total);
            assert!(pct >= last);
            last = pct;
        }
        assert_eq!(last, 100);
    }

    #[test]
    fn empty_module_reports_zero() {
        assert_eq!(progress_percent(0, 0), 0);
    }

    #[test]
    fn map_set_and_reset() {
        let mut map = ProgressMap::new();
        map.set(ModuleId::Graphs, 40);
        assert_eq!(map.get(ModuleId::Graphs), 40);
        assert_eq!(map.get(ModuleId::Tables), 0);

        map.reset();
        assert!(map.iter().all(|(_, pct)| pct == 0));
    }
}
