//! Community chat screen.

use alerta_vecinal_chat::ChatStore;
use alerta_vecinal_chat_models::{ChatChannel, ChatFilters, ChatMessage, ChatMessageType};
use dialoguer::{Confirm, Input, Select};

enum ChatAction {
    Read,
    Send,
    Filters,
    Report,
    Mute,
    Back,
}

impl ChatAction {
    const ALL: &[Self] = &[
        Self::Read,
        Self::Send,
        Self::Filters,
        Self::Report,
        Self::Mute,
        Self::Back,
    ];

    #[must_use]
    const fn label(&self) -> &'static str {
        match self {
            Self::Read => "Read messages",
            Self::Send => "Send a message",
            Self::Filters => "Filters",
            Self::Report => "Report a message",
            Self::Mute => "Mute a sender",
            Self::Back => "Back",
        }
    }
}

/// The chat for one channel at a time.
///
/// # Errors
///
/// Returns an error if a prompt fails.
pub fn run(chat: &mut ChatStore) -> Result<(), Box<dyn std::error::Error>> {
    let channels = ChatChannel::all();
    let idx = Select::new()
        .with_prompt("Canal")
        .items(channels)
        .default(0)
        .interact()?;
    let channel = channels[idx];

    let mut filters = ChatFilters::default();
    let labels: Vec<&str> = ChatAction::ALL.iter().map(ChatAction::label).collect();

    loop {
        let idx = Select::new()
            .with_prompt(format!("#{channel}"))
            .items(&labels)
            .default(0)
            .interact()?;

        match ChatAction::ALL[idx] {
            ChatAction::Read => {
                let messages = chat.filter(channel, &filters);
                if messages.is_empty() {
                    println!("No hay mensajes.");
                }
                for message in messages {
                    print_message(message);
                }
            }
            ChatAction::Send => {
                let content: String = Input::new()
                    .with_prompt("Mensaje")
                    .allow_empty(true)
                    .interact_text()?;
                if chat.send(&content, channel).is_none() {
                    println!("El mensaje está vacío.");
                }
            }
            ChatAction::Filters => {
                filters = prompt_filters(filters)?;
                if filters.is_active() {
                    println!("Filtros activos.");
                }
            }
            ChatAction::Report => {
                if let Some(message) = pick_message(chat, channel, &filters)? {
                    let id = message.id.clone();
                    if chat.report(&id) {
                        println!("Mensaje reportado.");
                    }
                }
            }
            ChatAction::Mute => {
                if let Some(message) = pick_message(chat, channel, &filters)? {
                    let sender = message.sender.clone();
                    chat.mute(&sender);
                    println!("{sender} silenciado.");
                }
            }
            ChatAction::Back => return Ok(()),
        }
    }
}

fn print_message(message: &ChatMessage) {
    let arrow = if message.is_outgoing() { ">" } else { "<" };
    let badge = if message.has_badge() {
        format!(" [{} / {}]", message.message_type, message.priority)
    } else {
        String::new()
    };
    println!(
        "{arrow} {} {}{badge}: {}",
        message.timestamp.format("%H:%M"),
        message.sender,
        message.content
    );
}

fn pick_message<'a>(
    chat: &'a ChatStore,
    channel: ChatChannel,
    filters: &ChatFilters,
) -> Result<Option<&'a ChatMessage>, dialoguer::Error> {
    let messages = chat.filter(channel, filters);
    if messages.is_empty() {
        println!("No hay mensajes.");
        return Ok(None);
    }
    let items: Vec<String> = messages
        .iter()
        .map(|m| format!("{}: {}", m.sender, m.content))
        .collect();
    let idx = Select::new().items(&items).interact()?;
    Ok(messages.get(idx).copied())
}

fn prompt_filters(current: ChatFilters) -> Result<ChatFilters, dialoguer::Error> {
    let show_all_types = Confirm::new()
        .with_prompt("Mostrar todos los tipos")
        .default(current.show_all_types)
        .interact()?;
    let selected_type = if show_all_types {
        current.selected_type
    } else {
        let types = ChatMessageType::all();
        let idx = Select::new()
            .with_prompt("Tipo")
            .items(types)
            .default(0)
            .interact()?;
        types[idx]
    };
    Ok(ChatFilters {
        show_all_types,
        selected_type,
        hide_old_messages: Confirm::new()
            .with_prompt("Ocultar mensajes de más de 12 horas")
            .default(current.hide_old_messages)
            .interact()?,
        hide_non_urgent: Confirm::new()
            .with_prompt("Ocultar mensajes de baja prioridad")
            .default(current.hide_non_urgent)
            .interact()?,
    })
}
