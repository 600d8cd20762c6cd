// Draft -> submission request
pub mod payload;
pub mod transformer;

pub use payload::{
    CurvePayload, FinalTaxPayload, LinksPayload, StepSchedulePayload, SubmissionPayload, V2Payload,
};
pub use transformer::{TransformContext, TransformError, compose_bio, transform};
