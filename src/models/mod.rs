pub mod model_info;
pub mod question;

pub use model_info::{ModelId, ModelInfo};
pub use question::{ExamQuestion, FlattenedRecord, QuestionSet};
