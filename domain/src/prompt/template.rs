//! Prompt templates for a conversation turn

use crate::conversation::transcript::Transcript;
use crate::core::topic::Topic;
use crate::participant::entities::Participant;
use crate::session::entities::Message;

/// The two messages sent for one turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnPrompt {
    pub system: String,
    pub user: String,
}

impl TurnPrompt {
    /// System message first, then the synthesized user message.
    pub fn into_messages(self) -> Vec<Message> {
        vec![Message::system(self.system), Message::user(self.user)]
    }
}

/// Builds per-participant prompts from the shared transcript.
///
/// The full history is flattened into a single user message every turn.
/// Calls stay stateless and provider-agnostic, at the price of prompt
/// size growing linearly with the number of turns. Nothing is truncated.
pub struct PromptTemplate;

impl PromptTemplate {
    /// Build the system and user messages for `participant`'s turn.
    pub fn build(participant: &Participant, transcript: &Transcript, topic: &Topic) -> TurnPrompt {
        let user = if transcript.is_empty() {
            Self::opening(participant.name(), topic)
        } else {
            Self::continuation(participant.name(), transcript)
        };

        TurnPrompt {
            system: participant.system_prompt().to_string(),
            user,
        }
    }

    /// User prompt for the first turn
    pub fn opening(speaker: &str, topic: &Topic) -> String {
        format!(
            r#"You are {speaker}.
The topic to discuss is: {topic}

Start the conversation by introducing the topic and asking an opening question."#
        )
    }

    /// User prompt for every later turn
    pub fn continuation(speaker: &str, transcript: &Transcript) -> String {
        format!(
            r#"You are {speaker}.

The conversation so far is:
{history}

Now respond with what you would like to say next, as {speaker}. Be natural and conversational."#,
            history = transcript.render()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conversation::transcript::TranscriptEntry;
    use crate::participant::entities::ParticipantRole;
    use crate::providers::ProviderKind;
    use crate::session::entities::Role;

    fn participant(name: &str, prompt: &str) -> Participant {
        Participant::new(name, ParticipantRole::Student, ProviderKind::Local, "m", prompt)
    }

    #[test]
    fn test_system_message_is_unmodified() {
        let p = participant("Ana", "  Be terse.\n");
        let prompt = PromptTemplate::build(&p, &Transcript::new(), &Topic::default());
        assert_eq!(prompt.system, "  Be terse.\n");
    }

    #[test]
    fn test_opening_prompt_for_empty_transcript() {
        let topic = Topic::new("Lifetimes");
        let prompt = PromptTemplate::build(&participant("Ana", "s"), &Transcript::new(), &topic);
        assert_eq!(
            prompt.user,
            "You are Ana.\nThe topic to discuss is: Lifetimes\n\nStart the conversation by introducing the topic and asking an opening question."
        );
    }

    #[test]
    fn test_opening_prompt_is_the_same_template_for_everyone() {
        let topic = Topic::default();
        let a = PromptTemplate::build(&participant("Ana", "x"), &Transcript::new(), &topic);
        let b = PromptTemplate::build(&participant("Bo", "y"), &Transcript::new(), &topic);
        assert_eq!(a.user.replace("Ana", "{name}"), b.user.replace("Bo", "{name}"));
        assert!(a.user.contains(topic.content()));
        // Building twice yields the same text.
        let again = PromptTemplate::build(&participant("Ana", "x"), &Transcript::new(), &topic);
        assert_eq!(a, again);
    }

    #[test]
    fn test_continuation_contains_whole_history() {
        let mut t = Transcript::new();
        t.push(TranscriptEntry::new("Ana", "Hello"));
        t.push(TranscriptEntry::new("Bo", "Hi Ana"));
        let prompt = PromptTemplate::build(&participant("Cy", "s"), &t, &Topic::default());
        assert_eq!(
            prompt.user,
            "You are Cy.\n\nThe conversation so far is:\nAna: Hello\n\nBo: Hi Ana\n\nNow respond with what you would like to say next, as Cy. Be natural and conversational."
        );
        assert!(!prompt.user.contains("The topic to discuss"));
    }

    #[test]
    fn test_into_messages_order() {
        let prompt = TurnPrompt {
            system: "sys".to_string(),
            user: "usr".to_string(),
        };
        let messages = prompt.into_messages();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, Role::System);
        assert_eq!(messages[1].role, Role::User);
        assert_eq!(messages[1].content, "usr");
    }
}
