use quiz_core::model::Quiz;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizListItemVm {
    pub id: u64,
    pub title: String,
    pub subject: String,
    pub difficulty: &'static str,
    pub duration_minutes: u32,
    pub question_count: usize,
}

impl From<&Quiz> for QuizListItemVm {
    fn from(quiz: &Quiz) -> Self {
        Self {
            id: quiz.id().value(),
            title: quiz.title().to_owned(),
            subject: quiz.subject().to_owned(),
            difficulty: quiz.difficulty().as_str(),
            duration_minutes: quiz.duration_minutes(),
            question_count: quiz.len(),
        }
    }
}

#[must_use]
pub fn map_quiz_list(quizzes: &[Quiz]) -> Vec<QuizListItemVm> {
    quizzes.iter().map(QuizListItemVm::from).collect()
}
