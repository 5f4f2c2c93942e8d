use crate::patch::PatchId;

/// Active-learning loop errors.
#[derive(Debug, thiserror::Error)]
pub enum LearningError {
    #[error("query set is empty")]
    EmptyQuerySet,

    #[error("query patches carry {distinct} distinct labels, expected exactly one")]
    MixedQueryLabels { distinct: usize },

    #[error("patch {patch} has a non-finite feature value")]
    NonFiniteFeature { patch: PatchId },

    #[error("patch {patch} is unlabeled")]
    UnlabeledPatch { patch: PatchId },

    #[error("no query set has been provided for this session")]
    MissingQuerySet,

    #[error("diversity selection mismatch: requested {requested} representatives, produced {produced}")]
    DiversityMismatch { requested: usize, produced: usize },
}
