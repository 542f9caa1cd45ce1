use quiz_core::model::{Difficulty, Question, QuestionId, Quiz, QuizId};

use crate::repository::{CatalogError, InMemoryCatalog};

/// The catalog shipped with the app, used when no catalog file is configured.
///
/// # Errors
///
/// Returns `CatalogError::Invalid` if the built-in data fails validation.
pub fn sample_catalog() -> Result<InMemoryCatalog, CatalogError> {
    InMemoryCatalog::from_quizzes([neural_networks_quiz()?])
}

fn neural_networks_quiz() -> Result<Quiz, CatalogError> {
    let id = QuizId::new(1);
    let invalid = |source: quiz_core::Error| CatalogError::Invalid { quiz: id, source };

    let questions = vec![
        Question::new(
            QuestionId::new(1),
            "What is the primary function of backpropagation in neural networks?",
            vec![
                "To initialize weights".into(),
                "To calculate gradients and update weights".into(),
                "To add more layers".into(),
                "To remove overfitting".into(),
            ],
            1,
            Some(
                "Backpropagation calculates gradients of the loss function with respect to \
                 weights and uses them to update the network parameters."
                    .into(),
            ),
        )
        .map_err(|e| invalid(e.into()))?,
        Question::new(
            QuestionId::new(2),
            "Which activation function is most commonly used in hidden layers of modern neural networks?",
            vec!["Sigmoid".into(), "Tanh".into(), "ReLU".into(), "Linear".into()],
            2,
            Some(
                "ReLU (Rectified Linear Unit) is widely used because it helps mitigate the \
                 vanishing gradient problem."
                    .into(),
            ),
        )
        .map_err(|e| invalid(e.into()))?,
    ];

    Quiz::new(
        id,
        "Neural Networks Quiz",
        "Computer Science",
        Difficulty::Medium,
        30,
        questions,
    )
    .map_err(|e| invalid(e.into()))
}
