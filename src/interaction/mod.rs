use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// How many sectors may be pulled out of the pie at the same time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DetachPolicy {
    /// Detaching one sector re-attaches any other (default behavior).
    #[default]
    Single,
    /// Every sector toggles independently.
    Multiple,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SectorState {
    #[default]
    Attached,
    Detached,
}

/// Messages accepted by [`InteractionState::apply`].
///
/// Indices are not range-checked here; the engine validates them against the
/// current dataset before dispatching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InteractionCommand {
    /// Click behavior: attached becomes detached and vice versa.
    ToggleDetached(usize),
    Detach(usize),
    Attach(usize),
    AttachAll,
    Highlight(usize),
    ClearHighlight,
}

impl InteractionCommand {
    #[must_use]
    pub fn target_index(self) -> Option<usize> {
        match self {
            Self::ToggleDetached(index)
            | Self::Detach(index)
            | Self::Attach(index)
            | Self::Highlight(index) => Some(index),
            Self::AttachAll | Self::ClearHighlight => None,
        }
    }
}

/// Presentation state owned by the engine and read by the draw pass.
///
/// All mutation goes through [`InteractionState::apply`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct InteractionState {
    policy: DetachPolicy,
    detached: BTreeSet<usize>,
    highlighted: Option<usize>,
}

impl InteractionState {
    #[must_use]
    pub fn with_policy(policy: DetachPolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn policy(&self) -> DetachPolicy {
        self.policy
    }

    /// Switching to `Single` keeps only the lowest detached index.
    pub fn set_policy(&mut self, policy: DetachPolicy) {
        self.policy = policy;
        if policy == DetachPolicy::Single {
            if let Some(first) = self.detached.first().copied() {
                self.detached.retain(|index| *index == first);
            }
        }
    }

    #[must_use]
    pub fn sector_state(&self, index: usize) -> SectorState {
        if self.detached.contains(&index) {
            SectorState::Detached
        } else {
            SectorState::Attached
        }
    }

    #[must_use]
    pub fn is_detached(&self, index: usize) -> bool {
        self.detached.contains(&index)
    }

    #[must_use]
    pub fn is_highlighted(&self, index: usize) -> bool {
        self.highlighted == Some(index)
    }

    /// Detached sector for the single-detach policy, or the lowest one otherwise.
    #[must_use]
    pub fn detached_index(&self) -> Option<usize> {
        self.detached.first().copied()
    }

    pub fn detached_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.detached.iter().copied()
    }

    #[must_use]
    pub fn highlighted(&self) -> Option<usize> {
        self.highlighted
    }

    /// Applies one command and reports whether the visible state changed.
    pub fn apply(&mut self, command: InteractionCommand) -> bool {
        match command {
            InteractionCommand::ToggleDetached(index) => {
                if self.detached.contains(&index) {
                    self.detached.remove(&index)
                } else {
                    self.detach(index)
                }
            }
            InteractionCommand::Detach(index) => self.detach(index),
            InteractionCommand::Attach(index) => self.detached.remove(&index),
            InteractionCommand::AttachAll => {
                let changed = !self.detached.is_empty();
                self.detached.clear();
                changed
            }
            InteractionCommand::Highlight(index) => {
                self.highlighted.replace(index) != Some(index)
            }
            InteractionCommand::ClearHighlight => self.highlighted.take().is_some(),
        }
    }

    /// Drops state referring to sectors that no longer exist.
    pub fn retain_within(&mut self, len: usize) {
        self.detached.retain(|index| *index < len);
        if self.highlighted.is_some_and(|index| index >= len) {
            self.highlighted = None;
        }
    }

    fn detach(&mut self, index: usize) -> bool {
        if self.detached.contains(&index) {
            return false;
        }
        if self.policy == DetachPolicy::Single {
            self.detached.clear();
        }
        self.detached.insert(index)
    }
}

// A `Single` policy never holds more than one detached sector, including
// state restored from a snapshot.
impl<'de> Deserialize<'de> for InteractionState {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct RawInteractionState {
            policy: DetachPolicy,
            detached: BTreeSet<usize>,
            highlighted: Option<usize>,
        }

        let raw = RawInteractionState::deserialize(deserializer)?;
        if raw.policy == DetachPolicy::Single && raw.detached.len() > 1 {
            return Err(serde::de::Error::custom(format!(
                "single detach policy allows one detached sector, got {}",
                raw.detached.len()
            )));
        }
        Ok(Self {
            policy: raw.policy,
            detached: raw.detached,
            highlighted: raw.highlighted,
        })
    }
}
