use quiz_core::model::ModuleId;
use services::SessionController;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModuleCardVm {
    pub id: ModuleId,
    pub icon: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub badge: &'static str,
    pub completed: bool,
    pub class: &'static str,
    /// Only present once the module has some progress.
    pub progress_label: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModuleSelectVm {
    pub badges: Vec<String>,
    pub cards: Vec<ModuleCardVm>,
    pub final_unlocked: bool,
}

#[must_use]
pub fn map_module_select(session: &SessionController) -> ModuleSelectVm {
    let profile = session.profile();
    let cards = ModuleId::ALL
        .into_iter()
        .map(|id| {
            let info = id.info();
            let completed = profile.is_complete(id);
            let percent = session.progress().get(id);
            ModuleCardVm {
                id,
                icon: info.icon,
                name: info.name,
                description: info.description,
                badge: info.badge,
                completed,
                class: if completed {
                    "module-card completed"
                } else {
                    "module-card"
                },
                progress_label: (percent > 0).then(|| format!("Fortschritt: {percent}%")),
            }
        })
        .collect();

    ModuleSelectVm {
        badges: profile.badges().to_vec(),
        cards,
        final_unlocked: session.can_start_final(),
    }
}
