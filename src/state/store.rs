use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::composer::{aggregate, favorites, serializer, ComposerConfig};
use crate::models::{AnalysisRecord, FoodGroup, GroupId, IngredientId, Nutrition};

/// A discrete edit applied to the composition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Action {
    SetGroups(Vec<FoodGroup>),
    ToggleExpanded(GroupId),
    ChangeServingMultiplier {
        group: GroupId,
        delta: f64,
    },
    DeleteGroup(GroupId),
    DeleteIngredient {
        group: GroupId,
        ingredient: IngredientId,
    },
    ToggleFavorite {
        group: GroupId,
        ingredient: Option<IngredientId>,
    },
    SetEditMode(bool),
}

/// Everything a session shows: the groups, UI flags, and the meal total.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompositionState {
    pub groups: Vec<FoodGroup>,
    pub expanded: BTreeSet<GroupId>,
    pub edit_mode: bool,
    pub total: Nutrition,
}

impl CompositionState {
    pub fn group(&self, id: GroupId) -> Option<&FoodGroup> {
        self.groups.iter().find(|g| g.id == id)
    }

    fn group_mut(&mut self, id: GroupId) -> Option<&mut FoodGroup> {
        self.groups.iter_mut().find(|g| g.id == id)
    }
}

/// Apply one action to a draft state. Returns false when the action was dropped.
fn reduce_in_place(st: &mut CompositionState, action: Action, config: &ComposerConfig) -> bool {
    match action {
        Action::SetGroups(mut groups) => {
            for group in &mut groups {
                group.recompute();
            }
            info!(count = groups.len(), "composition loaded");
            st.groups = groups;
            st.expanded.clear();
            true
        }

        Action::ToggleExpanded(id) => {
            if st.group(id).is_none() {
                debug!(%id, "expand toggle dropped: unknown group");
                return false;
            }
            if !st.expanded.remove(&id) {
                st.expanded.insert(id);
            }
            true
        }

        Action::ChangeServingMultiplier { group, delta } => {
            let Some(target) = st.group_mut(group) else {
                debug!(%group, "serving change dropped: unknown group");
                return false;
            };
            match target.serving_multiplier.step(delta) {
                Some(next) => {
                    target.serving_multiplier = next;
                    target.rescale();
                    true
                }
                None => {
                    debug!(%group, delta, current = %target.serving_multiplier, "serving change out of range");
                    false
                }
            }
        }

        Action::DeleteGroup(id) => {
            let before = st.groups.len();
            st.groups.retain(|g| g.id != id);
            st.expanded.remove(&id);
            if st.groups.len() == before {
                debug!(%id, "delete dropped: unknown group");
                return false;
            }
            true
        }

        Action::DeleteIngredient { group, ingredient } => {
            let Some(parent) = st.group_mut(group) else {
                debug!(%group, "ingredient delete dropped: unknown group");
                return false;
            };
            let Some(pos) = parent.ingredients.iter().position(|i| i.id == ingredient) else {
                debug!(%group, %ingredient, "ingredient delete dropped: unknown ingredient");
                return false;
            };
            let removed = parent.ingredients.remove(pos);
            // The removed nutrition is unscaled; the multiplier applies afterwards.
            parent.base_nutrition = aggregate::subtract_clamped(&parent.base_nutrition, &removed.nutrition);
            parent.recompute();
            true
        }

        Action::ToggleFavorite { group, ingredient } => {
            let Some(target) = st.group_mut(group) else {
                debug!(%group, "favorite toggle dropped: unknown group");
                return false;
            };
            match favorites::toggle(config.favorite_policy, target, ingredient) {
                Some(next) => {
                    *target = next;
                    true
                }
                None => {
                    debug!(%group, ?ingredient, "favorite toggle dropped: unknown ingredient");
                    false
                }
            }
        }

        Action::SetEditMode(on) => {
            st.edit_mode = on;
            true
        }
    }
}

/// Owns the composition for one editing session.
///
/// Every dispatch works on a draft copy and swaps it in only once totals are
/// recomputed, so readers never see a half-applied edit.
#[derive(Debug, Default, Clone)]
pub struct CompositionStore {
    st: CompositionState,
    config: ComposerConfig,
}

impl CompositionStore {
    pub fn new(config: ComposerConfig) -> Self {
        Self {
            st: CompositionState::default(),
            config,
        }
    }

    /// Start a session from an already classified hierarchy.
    pub fn with_groups(groups: Vec<FoodGroup>, config: ComposerConfig) -> Self {
        let mut store = Self::new(config);
        store.set_groups(groups);
        store
    }

    pub fn state(&self) -> &CompositionState {
        &self.st
    }

    pub fn config(&self) -> &ComposerConfig {
        &self.config
    }

    pub fn groups(&self) -> &[FoodGroup] {
        &self.st.groups
    }

    pub fn group(&self, id: GroupId) -> Option<&FoodGroup> {
        self.st.group(id)
    }

    pub fn total(&self) -> Nutrition {
        self.st.total
    }

    pub fn is_expanded(&self, id: GroupId) -> bool {
        self.st.expanded.contains(&id)
    }

    pub fn edit_mode(&self) -> bool {
        self.st.edit_mode
    }

    pub fn len(&self) -> usize {
        self.st.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.st.groups.is_empty()
    }

    /// Apply one action. Returns false if it was dropped as a no-op.
    pub fn dispatch(&mut self, action: Action) -> bool {
        let mut draft = self.st.clone();
        let applied = reduce_in_place(&mut draft, action, &self.config);
        if applied {
            draft.total = aggregate::session_total(&draft.groups);
            self.st = draft;
        }
        applied
    }

    /// Apply actions in order as one swap. Returns how many were applied.
    pub fn dispatch_many<I: IntoIterator<Item = Action>>(&mut self, actions: I) -> usize {
        let mut draft = self.st.clone();
        let applied = actions
            .into_iter()
            .map(|a| reduce_in_place(&mut draft, a, &self.config))
            .filter(|applied| *applied)
            .count();
        draft.total = aggregate::session_total(&draft.groups);
        self.st = draft;
        applied
    }

    pub fn set_groups(&mut self, groups: Vec<FoodGroup>) -> bool {
        self.dispatch(Action::SetGroups(groups))
    }

    pub fn toggle_expanded(&mut self, group: GroupId) -> bool {
        self.dispatch(Action::ToggleExpanded(group))
    }

    pub fn change_serving_multiplier(&mut self, group: GroupId, delta: f64) -> bool {
        self.dispatch(Action::ChangeServingMultiplier { group, delta })
    }

    pub fn delete_group(&mut self, group: GroupId) -> bool {
        self.dispatch(Action::DeleteGroup(group))
    }

    pub fn delete_ingredient(&mut self, group: GroupId, ingredient: IngredientId) -> bool {
        self.dispatch(Action::DeleteIngredient { group, ingredient })
    }

    pub fn toggle_favorite(&mut self, group: GroupId, ingredient: Option<IngredientId>) -> bool {
        self.dispatch(Action::ToggleFavorite { group, ingredient })
    }

    pub fn set_edit_mode(&mut self, on: bool) -> bool {
        self.dispatch(Action::SetEditMode(on))
    }

    /// Flatten the current state for persistence.
    pub fn to_record(&self) -> AnalysisRecord {
        serializer::to_record(&self.st.groups)
    }
}
