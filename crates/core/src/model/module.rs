use crate::model::ids::ModuleId;

/// Static presentation data for a topic module.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModuleInfo {
    pub id: ModuleId,
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub badge: &'static str,
}

const TABLES: ModuleInfo = ModuleInfo {
    id: ModuleId::Tables,
    name: "Tabellen-Detektive",
    description: "Zuordnungstypen erkennen",
    icon: "📊",
    badge: "🏆 Tabellen-Profi",
};

const GRAPHS: ModuleInfo = ModuleInfo {
    id: ModuleId::Graphs,
    name: "Graphen-Labor",
    description: "Graphen verstehen",
    icon: "📈",
    badge: "📊 Graphen-Experte",
};

const STRATEGIES: ModuleInfo = ModuleInfo {
    id: ModuleId::Strategies,
    name: "Rechen-Strategien",
    description: "Flexibel rechnen",
    icon: "🧮",
    badge: "🧮 Rechen-Champion",
};

const CONTEXT: ModuleInfo = ModuleInfo {
    id: ModuleId::Context,
    name: "Kontext-Profis",
    description: "Textaufgaben lösen",
    icon: "🌟",
    badge: "🌟 Alltagsprofi",
};

impl ModuleId {
    #[must_use]
    pub fn info(self) -> &'static ModuleInfo {
        match self {
            ModuleId::Tables => &TABLES,
            ModuleId::Graphs => &GRAPHS,
            ModuleId::Strategies => &STRATEGIES,
            ModuleId::Context => &CONTEXT,
        }
    }

    /// Heading shown while the module runs, icon first.
    #[must_use]
    pub fn title(self) -> String {
        let info = self.info();
        format!("{} {}", info.icon, info.name)
    }

    /// Badge awarded when the module is finished.
    #[must_use]
    pub fn badge(self) -> &'static str {
        self.info().badge
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_module_has_a_distinct_badge() {
        let mut badges: Vec<_> = ModuleId::ALL.iter().map(|m| m.badge()).collect();
        badges.sort_unstable();
        badges.dedup();
        assert_eq!(badges.len(), ModuleId::ALL.len());
    }

    #[test]
    fn title_prefixes_icon() {
        assert_eq!(ModuleId::Tables.title(), "📊 Tabellen-Detektive");
        assert_eq!(ModuleId::Context.title(), "🌟 Kontext-Profis");
    }
}
