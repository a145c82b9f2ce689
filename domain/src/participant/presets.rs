//! Built-in lineup: one teacher and two students.
//!
//! Used whenever the configuration does not list its own participants.

use super::entities::{Participant, ParticipantRole};
use super::sampling::SamplingConfig;
use crate::core::model::Model;
use crate::providers::ProviderKind;

pub const TEACHER_NAME: &str = "Professor Maya";
pub const CURIOUS_STUDENT_NAME: &str = "Curious George";
pub const HANDS_ON_STUDENT_NAME: &str = "Handson Alex";

pub const TEACHER_PROMPT: &str = r#"You are Professor Maya, a Python programming teacher teaching Curious George and Handson Alex.

TEACHING PROGRESSION (follow this order):
1. Start with print("Hello, World!") - explain strings and basic output
2. Then teach variables: name = "Alice", age = 25
3. Then data types: strings, integers, floats, booleans
4. Keep building progressively based on what students understand

TEACHING STYLE:
- Give ONE concrete code example per message
- Ask students to try it or explain what it does
- Wait for their responses before moving to next concept
- Keep responses to 2-3 sentences max
- Build on what students say"#;

pub const CURIOUS_STUDENT_PROMPT: &str = r#"You are Curious George, a beginner learning Python with Professor Maya and Handson Alex.
You ask "why" questions about concepts. You want to understand the theory and purpose behind the code.
When Professor Maya shows code, ask questions like "Why do we use quotes?" or "What does this do?"
Keep responses brief (2-3 sentences)."#;

pub const HANDS_ON_STUDENT_PROMPT: &str = r#"You are Handson Alex, a beginner learning Python with Professor Maya and Curious George.
You learn by doing. When you see code, you want to try variations or ask what happens if you change it.
When Professor Maya shows code, ask questions like "What if I use numbers?" or share what you tried.
Keep responses brief (2-3 sentences)."#;

/// Classroom served entirely by a local inference server.
pub fn local_classroom() -> Vec<Participant> {
    vec![
        Participant::new(
            TEACHER_NAME,
            ParticipantRole::Teacher,
            ProviderKind::Local,
            Model::Llama32,
            TEACHER_PROMPT,
        )
        .with_sampling(SamplingConfig::new(0.7, 0.9, 150).with_top_k(40)),
        Participant::new(
            CURIOUS_STUDENT_NAME,
            ParticipantRole::Student,
            ProviderKind::Local,
            Model::Llama32_1b,
            CURIOUS_STUDENT_PROMPT,
        )
        .with_sampling(SamplingConfig::new(0.4, 0.85, 100).with_top_k(50)),
        Participant::new(
            HANDS_ON_STUDENT_NAME,
            ParticipantRole::Student,
            ProviderKind::Local,
            Model::Gemma3_1b,
            HANDS_ON_STUDENT_PROMPT,
        )
        .with_sampling(SamplingConfig::new(0.9, 0.9, 100).with_top_k(60)),
    ]
}

/// Classroom served by the hosted API.
pub fn hosted_classroom() -> Vec<Participant> {
    vec![
        Participant::new(
            TEACHER_NAME,
            ParticipantRole::Teacher,
            ProviderKind::Hosted,
            Model::Gpt4o,
            TEACHER_PROMPT,
        )
        .with_sampling(SamplingConfig::default().with_temperature(0.7).with_max_tokens(150)),
        Participant::new(
            CURIOUS_STUDENT_NAME,
            ParticipantRole::Student,
            ProviderKind::Hosted,
            Model::O1Mini,
            CURIOUS_STUDENT_PROMPT,
        )
        .with_sampling(SamplingConfig::default().with_temperature(0.4).with_max_tokens(100)),
        Participant::new(
            HANDS_ON_STUDENT_NAME,
            ParticipantRole::Student,
            ProviderKind::Hosted,
            Model::Gpt4oMini,
            HANDS_ON_STUDENT_PROMPT,
        )
        .with_sampling(SamplingConfig::default().with_temperature(0.9).with_max_tokens(100)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_classroom_shape() {
        let lineup = local_classroom();
        assert_eq!(lineup.len(), 3);
        assert!(lineup.iter().all(|p| p.provider() == ProviderKind::Local));
        assert_eq!(lineup[0].role(), ParticipantRole::Teacher);
        assert_eq!(lineup[1].sampling().temperature, 0.4);
        assert_eq!(lineup[2].sampling().top_k, Some(60));
    }

    #[test]
    fn test_hosted_classroom_models() {
        let models: Vec<String> = hosted_classroom()
            .iter()
            .map(|p| p.model().to_string())
            .collect();
        assert_eq!(models, vec!["gpt-4o", "o1-mini", "gpt-4o-mini"]);
    }

    #[test]
    fn test_prompts_name_their_speaker() {
        for p in local_classroom() {
            assert!(p.system_prompt().starts_with(&format!("You are {}", p.name())));
        }
    }
}
