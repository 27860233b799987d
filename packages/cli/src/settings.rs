//! Notification, privacy and appearance settings.

use alerta_vecinal_settings::{
    AppSettings, DataRetention, MapStyle, NotificationPreview, SettingsStore, Theme,
};
use dialoguer::{Confirm, Select};

enum SettingsAction {
    Show,
    Notifications,
    ResetNotifications,
    Privacy,
    Appearance,
    ResetAppearance,
    Save,
    Back,
}

impl SettingsAction {
    const ALL: &[Self] = &[
        Self::Show,
        Self::Notifications,
        Self::ResetNotifications,
        Self::Privacy,
        Self::Appearance,
        Self::ResetAppearance,
        Self::Save,
        Self::Back,
    ];

    #[must_use]
    const fn label(&self) -> &'static str {
        match self {
            Self::Show => "Show settings",
            Self::Notifications => "Notifications",
            Self::ResetNotifications => "Reset notification settings",
            Self::Privacy => "Privacy",
            Self::Appearance => "Appearance",
            Self::ResetAppearance => "Reset appearance",
            Self::Save => "Save",
            Self::Back => "Back",
        }
    }
}

/// Edits the settings in `store`; changes persist on save.
///
/// # Errors
///
/// Returns an error if a prompt fails or the settings file cannot be
/// written.
pub fn run(store: &mut SettingsStore) -> Result<(), Box<dyn std::error::Error>> {
    let labels: Vec<&str> = SettingsAction::ALL
        .iter()
        .map(SettingsAction::label)
        .collect();

    loop {
        let idx = Select::new()
            .with_prompt("Ajustes")
            .items(&labels)
            .default(0)
            .interact()?;

        let settings = store.settings_mut();
        match SettingsAction::ALL[idx] {
            SettingsAction::Show => print_settings(settings),
            SettingsAction::Notifications => {
                let n = &mut settings.notifications;
                n.enabled = toggle("Permitir notificaciones", n.enabled)?;
                n.sound = toggle("Sonido", n.sound)?;
                n.vibration = toggle("Vibración", n.vibration)?;
                n.preview = choose("Vista previa", NotificationPreview::all(), n.preview)?;
                n.quiet_hours.enabled = toggle("Horas de silencio", n.quiet_hours.enabled)?;
                n.emergency.critical = toggle("Alertas críticas", n.emergency.critical)?;
                n.community.events = toggle("Eventos comunitarios", n.community.events)?;
                n.activity.report_updates =
                    toggle("Actualizaciones de mis reportes", n.activity.report_updates)?;
            }
            SettingsAction::ResetNotifications => {
                settings.reset_notifications();
                println!("Notificaciones restablecidas.");
            }
            SettingsAction::Privacy => {
                let p = &mut settings.privacy;
                p.share_location = toggle("Compartir ubicación", p.share_location)?;
                p.show_in_map = toggle("Mostrarme en el mapa", p.show_in_map)?;
                p.contact_visibility = toggle("Visible para contactos", p.contact_visibility)?;
                p.analytics = toggle("Análisis de uso", p.analytics)?;
                p.data_sharing = toggle("Compartir datos", p.data_sharing)?;
                p.visible_data.phone = toggle("Mostrar teléfono", p.visible_data.phone)?;
                p.retention = choose("Conservar mis datos por", DataRetention::all(), p.retention)?;
            }
            SettingsAction::Appearance => {
                let a = &mut settings.appearance;
                a.theme = choose("Tema", Theme::all(), a.theme)?;
                a.map_style = choose("Estilo del mapa", MapStyle::all(), a.map_style)?;
            }
            SettingsAction::ResetAppearance => settings.reset_appearance(),
            SettingsAction::Save => {
                store.save()?;
                println!("Guardado en {}", store.path().display());
            }
            SettingsAction::Back => return Ok(()),
        }
    }
}

fn toggle(prompt: &str, current: bool) -> Result<bool, dialoguer::Error> {
    Confirm::new().with_prompt(prompt).default(current).interact()
}

fn choose<T>(prompt: &str, options: &[T], current: T) -> Result<T, dialoguer::Error>
where
    T: Copy + PartialEq + std::fmt::Display,
{
    let default = options.iter().position(|o| *o == current).unwrap_or(0);
    let idx = Select::new()
        .with_prompt(prompt)
        .items(options)
        .default(default)
        .interact()?;
    Ok(options[idx])
}

fn print_settings(settings: &AppSettings) {
    let n = &settings.notifications;
    let p = &settings.privacy;
    println!("Notificaciones: {} (vista previa: {})", on_off(n.enabled), n.preview);
    println!("  Sonido {}, vibración {}", on_off(n.sound), on_off(n.vibration));
    if n.quiet_hours.enabled {
        println!(
            "  Silencio {} - {}",
            n.quiet_hours.from.format("%H:%M"),
            n.quiet_hours.to.format("%H:%M")
        );
    }
    println!(
        "Privacidad: ubicación {}, mapa {}, análisis {}",
        on_off(p.share_location),
        on_off(p.show_in_map),
        on_off(p.analytics)
    );
    println!("  Retención: {}", p.retention);
    println!(
        "Apariencia: {} / {}",
        settings.appearance.theme, settings.appearance.map_style
    );
}

const fn on_off(value: bool) -> &'static str {
    if value { "sí" } else { "no" }
}
