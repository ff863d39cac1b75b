pub mod question_handler;

pub use question_handler::{
    delete_question, generate_questions, health_check, list_my_questions, list_questions,
};
