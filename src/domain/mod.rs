// Domain types and value objects
pub mod assets;
pub mod draft;
pub mod fields;
pub mod profile;
pub mod steps;

// Re-export commonly used types
pub use assets::{AssetKind, AssetSource, LaunchAssets, LocalFile};
pub use draft::{
    AdvancedCurve, BasicCurve, BasicsInput, CurveSettings, FinalSettings, LaunchDraft, MetaInput,
    StealthConfig, StepSchedule, SuperCurve, V2Settings, ZeroCurve,
};
pub use fields::FieldId;
pub use profile::{
    DeploymentMode, FinalType, LpMode, Profile, StartMode, TaxMode, TradingMode,
    is_profile_allowed,
};
pub use steps::{WizardStep, step_sequence};
