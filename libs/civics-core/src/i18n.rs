//! Static English and Spanish UI strings.

use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// UI language.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Es,
}

impl Language {
    pub const ALL: [Language; 2] = [Self::En, Self::Es];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Es => "es",
        }
    }

    /// Key of this language's own display name.
    pub fn translation_key(&self) -> &'static str {
        match self {
            Self::En => "language.english",
            Self::Es => "language.spanish",
        }
    }

    fn table(&self) -> &'static [(&'static str, &'static str)] {
        match self {
            Self::En => EN,
            Self::Es => ES,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en" => Ok(Self::En),
            "es" => Ok(Self::Es),
            other => Err(CoreError::UnknownLanguage(other.to_string())),
        }
    }
}

fn lookup(table: &'static [(&'static str, &'static str)], key: &str) -> Option<&'static str> {
    table.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}

/// Translate `key`, falling back to English and then to the key itself.
pub fn translate<'a>(language: Language, key: &'a str) -> &'a str {
    match lookup(language.table(), key).or_else(|| lookup(EN, key)) {
        Some(text) => text,
        None => key,
    }
}

const EN: &[(&str, &str)] = &[
    ("nav.home", "Home"),
    ("nav.flashCards", "Flash Cards"),
    ("nav.multipleChoice", "Multiple Choice"),
    ("nav.fillInBlank", "Fill in the Blank"),
    ("nav.progress", "Progress"),
    ("nav.signIn", "Sign In"),
    ("nav.signOut", "Sign Out"),
    ("home.title", "Patrias"),
    ("home.subtitle", "Master the 100 civics questions with fun, interactive study tools designed to help you pass your naturalization test."),
    ("home.startStudying", "Start Studying"),
    ("home.createAccount", "Create Account"),
    ("home.trackProgress", "Track Your Progress"),
    ("home.progressDescription", "Sign in to track your progress, see your strengths and weaknesses, and get personalized study recommendations."),
    ("home.studyTips", "Study Tips"),
    ("home.studyTipsDescription", "Advice for passing your citizenship exam"),
    ("flashCards.title", "Flash Cards"),
    ("flashCards.backToHome", "Back to Home"),
    ("flashCards.filterQuestions", "Filter Questions"),
    ("flashCards.question", "Question"),
    ("flashCards.answer", "Answer"),
    ("flashCards.tapToReveal", "Tap to reveal answer"),
    ("flashCards.tapToSeeQuestion", "Tap to see question"),
    ("flashCards.previous", "Previous"),
    ("flashCards.reset", "Reset"),
    ("flashCards.skip", "Skip"),
    ("flashCards.iDontKnow", "I Don't Know"),
    ("flashCards.iKnowThis", "I Know This"),
    ("flashCards.revealAnswer", "Reveal Answer"),
    ("flashCards.signInPrompt", "Sign in to track your progress and see personalized recommendations"),
    ("flashCards.elderlyNote", "* Questions marked with \"65+ Years\" are specifically for applicants who are 65 years or older and have been a legal permanent resident for 20 or more years."),
    ("multipleChoice.title", "Multiple Choice"),
    ("multipleChoice.score", "Score"),
    ("multipleChoice.restart", "Restart Quiz"),
    ("multipleChoice.question", "Question"),
    ("multipleChoice.of", "of"),
    ("multipleChoice.complete", "Complete"),
    ("multipleChoice.submitAnswer", "Submit Answer"),
    ("multipleChoice.correct", "Correct! Well done."),
    ("multipleChoice.incorrect", "Incorrect. The correct answer(s):"),
    ("multipleChoice.nextQuestion", "Next Question"),
    ("fillInBlank.title", "Fill in the Blank"),
    ("fillInBlank.completeAnswer", "Complete the answer:"),
    ("fillInBlank.typePlaceholder", "Type your answer here"),
    ("progress.title", "Your Progress"),
    ("progress.subtitle", "Track your study progress across different modes and categories"),
    ("progress.overview", "Overview"),
    ("progress.byCategory", "By Category"),
    ("progress.recommendations", "Recommendations"),
    ("progress.completion", "Completion"),
    ("progress.accuracy", "Accuracy"),
    ("progress.continueStudying", "Continue Studying"),
    ("progress.overallProgress", "Overall Progress"),
    ("progress.questionsCompleted", "Questions Completed"),
    ("progress.accuracyRate", "Accuracy Rate"),
    ("progress.testReadiness", "Estimated Test Readiness"),
    ("auth.welcomeBack", "Welcome back!"),
    ("auth.signInDescription", "Sign in to track your progress and continue your citizenship journey"),
    ("auth.email", "Email"),
    ("auth.password", "Password"),
    ("auth.forgotPassword", "Forgot password?"),
    ("auth.noAccount", "Don't have an account?"),
    ("auth.signUp", "Sign up"),
    ("auth.createAccount", "Create an account"),
    ("auth.signUpDescription", "Sign up to track your progress and ace your citizenship exam"),
    ("auth.name", "Name"),
    ("auth.confirmPassword", "Confirm Password"),
    ("auth.haveAccount", "Already have an account?"),
    ("language.english", "English"),
    ("language.spanish", "Spanish"),
    ("category.americanGovernment", "American Government"),
    ("category.americanHistory", "American History"),
    ("category.integratedCivics", "Integrated Civics"),
    ("category.elderlyOnly", "65+ Years Old Questions Only"),
];

const ES: &[(&str, &str)] = &[
    ("nav.home", "Inicio"),
    ("nav.flashCards", "Tarjetas de Memoria"),
    ("nav.multipleChoice", "Opción Múltiple"),
    ("nav.fillInBlank", "Completar Espacios"),
    ("nav.progress", "Progreso"),
    ("nav.signIn", "Iniciar Sesión"),
    ("nav.signOut", "Cerrar Sesión"),
    ("home.title", "Patrias"),
    ("home.subtitle", "Domina las 100 preguntas de educación cívica con herramientas de estudio interactivas y divertidas diseñadas para ayudarte a aprobar tu examen de naturalización."),
    ("home.startStudying", "Comenzar a Estudiar"),
    ("home.createAccount", "Crear Cuenta"),
    ("home.trackProgress", "Seguimiento de Progreso"),
    ("home.progressDescription", "Inicia sesión para seguir tu progreso, ver tus fortalezas y debilidades, y obtener recomendaciones de estudio personalizadas."),
    ("home.studyTips", "Consejos de Estudio"),
    ("home.studyTipsDescription", "Consejos para aprobar tu examen de ciudadanía"),
    ("flashCards.title", "Tarjetas de Memoria"),
    ("flashCards.backToHome", "Volver al Inicio"),
    ("flashCards.filterQuestions", "Filtrar Preguntas"),
    ("flashCards.question", "Pregunta"),
    ("flashCards.answer", "Respuesta"),
    ("flashCards.tapToReveal", "Toca para revelar respuesta"),
    ("flashCards.tapToSeeQuestion", "Toca para ver pregunta"),
    ("flashCards.previous", "Anterior"),
    ("flashCards.reset", "Reiniciar"),
    ("flashCards.skip", "Omitir"),
    ("flashCards.iDontKnow", "No lo Sé"),
    ("flashCards.iKnowThis", "Lo Sé"),
    ("flashCards.revealAnswer", "Mostrar Respuesta"),
    ("flashCards.signInPrompt", "Inicia sesión para seguir tu progreso y ver recomendaciones personalizadas"),
    ("flashCards.elderlyNote", "* Las preguntas marcadas con \"65+ Años\" son específicamente para solicitantes que tienen 65 años o más y han sido residentes permanentes legales durante 20 años o más."),
    ("multipleChoice.title", "Opción Múltiple"),
    ("multipleChoice.score", "Puntuación"),
    ("multipleChoice.restart", "Reiniciar Cuestionario"),
    ("multipleChoice.question", "Pregunta"),
    ("multipleChoice.of", "de"),
    ("multipleChoice.complete", "Completo"),
    ("multipleChoice.submitAnswer", "Enviar Respuesta"),
    ("multipleChoice.correct", "¡Correcto! Bien hecho."),
    ("multipleChoice.incorrect", "Incorrecto. La(s) respuesta(s) correcta(s):"),
    ("multipleChoice.nextQuestion", "Siguiente Pregunta"),
    ("fillInBlank.title", "Completar Espacios"),
    ("fillInBlank.completeAnswer", "Completa la respuesta:"),
    ("fillInBlank.typePlaceholder", "Escribe tu respuesta aquí"),
    ("progress.title", "Tu Progreso"),
    ("progress.subtitle", "Sigue tu progreso de estudio en diferentes modos y categorías"),
    ("progress.overview", "Resumen"),
    ("progress.byCategory", "Por Categoría"),
    ("progress.recommendations", "Recomendaciones"),
    ("progress.completion", "Completado"),
    ("progress.accuracy", "Precisión"),
    ("progress.continueStudying", "Continuar Estudiando"),
    ("progress.overallProgress", "Progreso General"),
    ("progress.questionsCompleted", "Preguntas Completadas"),
    ("progress.accuracyRate", "Tasa de Precisión"),
    ("progress.testReadiness", "Preparación Estimada para el Examen"),
    ("auth.welcomeBack", "¡Bienvenido de nuevo!"),
    ("auth.signInDescription", "Inicia sesión para seguir tu progreso y continuar tu camino hacia la ciudadanía"),
    ("auth.email", "Correo electrónico"),
    ("auth.password", "Contraseña"),
    ("auth.forgotPassword", "¿Olvidaste tu contraseña?"),
    ("auth.noAccount", "¿No tienes una cuenta?"),
    ("auth.signUp", "Regístrate"),
    ("auth.createAccount", "Crear una cuenta"),
    ("auth.signUpDescription", "Regístrate para seguir tu progreso y aprobar tu examen de ciudadanía"),
    ("auth.name", "Nombre"),
    ("auth.confirmPassword", "Confirmar Contraseña"),
    ("auth.haveAccount", "¿Ya tienes una cuenta?"),
    ("language.english", "Inglés"),
    ("language.spanish", "Español"),
    ("category.americanGovernment", "Gobierno Americano"),
    ("category.americanHistory", "Historia Americana"),
    ("category.integratedCivics", "Educación Cívica Integrada"),
    ("category.elderlyOnly", "Solo Preguntas para Mayores de 65 Años"),
];
