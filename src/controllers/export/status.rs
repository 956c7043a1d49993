/// Slot value meaning no export is running.
pub(crate) const IDLE: i32 = -1;

/// Snapshot of the export slot, cheap enough to read every frame.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ExportStatus {
    Idle,
    Running { progress: u8 },
}

impl ExportStatus {
    pub(crate) fn from_slot(slot: i32) -> Self {
        match u8::try_from(slot) {
            Ok(progress) => Self::Running {
                progress: progress.min(100),
            },
            Err(_) => Self::Idle,
        }
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        matches!(self, Self::Running { .. })
    }

    #[must_use]
    pub fn progress(&self) -> Option<u8> {
        match self {
            Self::Idle => None,
            Self::Running { progress } => Some(*progress),
        }
    }
}
