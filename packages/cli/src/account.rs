//! Sign-in, sign-up, profile and emergency contact screens.

use alerta_vecinal_account::{EmergencyContacts, ProfileService, Session, profile::optional_field};
use alerta_vecinal_account_models::{ContactRelation, LoginForm, RegistrationForm, User};
use dialoguer::{Confirm, Input, Password, Select};

enum AccountAction {
    SignIn,
    SignUp,
}

impl AccountAction {
    const ALL: &[Self] = &[Self::SignIn, Self::SignUp];

    #[must_use]
    const fn label(&self) -> &'static str {
        match self {
            Self::SignIn => "Iniciar sesión",
            Self::SignUp => "Registrarse",
        }
    }
}

/// Signs in, signs up, or signs out when already signed in.
///
/// # Errors
///
/// Returns an error if a prompt fails.
pub async fn run(session: &mut Session) -> Result<(), Box<dyn std::error::Error>> {
    if session.is_authenticated() {
        if Confirm::new()
            .with_prompt("Cerrar sesión?")
            .default(false)
            .interact()?
        {
            session.logout();
            println!("Sesión cerrada.");
        }
        return Ok(());
    }

    let labels: Vec<&str> = AccountAction::ALL.iter().map(AccountAction::label).collect();
    let idx = Select::new()
        .with_prompt("Cuenta")
        .items(&labels)
        .default(0)
        .interact()?;

    let result = match AccountAction::ALL[idx] {
        AccountAction::SignIn => session.login(&prompt_login()?).await,
        AccountAction::SignUp => session.register(&prompt_registration()?).await,
    };

    match result {
        Ok(()) => println!("Bienvenido."),
        Err(e) => println!("{e}"),
    }

    Ok(())
}

fn text(prompt: &str) -> Result<String, dialoguer::Error> {
    Input::new()
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()
}

fn text_with_default(prompt: &str, default: &str) -> Result<String, dialoguer::Error> {
    Input::new()
        .with_prompt(prompt)
        .default(default.to_string())
        .allow_empty(true)
        .interact_text()
}

fn secret(prompt: &str) -> Result<String, dialoguer::Error> {
    Password::new()
        .with_prompt(prompt)
        .allow_empty_password(true)
        .interact()
}

fn prompt_login() -> Result<LoginForm, dialoguer::Error> {
    Ok(LoginForm {
        identifier: text("Usuario o teléfono")?,
        password: secret("Contraseña")?,
        remember_user: Confirm::new()
            .with_prompt("Recordar usuario")
            .default(false)
            .interact()?,
    })
}

fn prompt_registration() -> Result<RegistrationForm, dialoguer::Error> {
    Ok(RegistrationForm {
        full_name: text("Nombre completo")?,
        username: text("Nombre de usuario")?,
        email: text("Correo electrónico")?,
        phone: text("Teléfono")?,
        address: text("Dirección")?,
        neighborhood: text("Barriada")?,
        password: secret("Contraseña")?,
        confirm_password: secret("Confirmar contraseña")?,
        accept_terms: Confirm::new()
            .with_prompt("Acepto los términos y condiciones")
            .interact()?,
        accept_data_law: Confirm::new()
            .with_prompt("Acepto el tratamiento de mis datos (Ley 81)")
            .interact()?,
        profile_image: None,
    })
}

enum ProfileAction {
    Show,
    Edit,
    ListContacts,
    AddContact,
    RemoveContact,
    Back,
}

impl ProfileAction {
    const ALL: &[Self] = &[
        Self::Show,
        Self::Edit,
        Self::ListContacts,
        Self::AddContact,
        Self::RemoveContact,
        Self::Back,
    ];

    #[must_use]
    const fn label(&self) -> &'static str {
        match self {
            Self::Show => "Ver perfil",
            Self::Edit => "Editar perfil",
            Self::ListContacts => "Contactos de emergencia",
            Self::AddContact => "Agregar contacto",
            Self::RemoveContact => "Eliminar contacto",
            Self::Back => "Volver",
        }
    }
}

/// Profile and emergency contact management.
///
/// # Errors
///
/// Returns an error if a prompt fails.
pub async fn run_profile(
    profile: &mut ProfileService,
    contacts: &mut EmergencyContacts,
) -> Result<(), Box<dyn std::error::Error>> {
    let labels: Vec<&str> = ProfileAction::ALL.iter().map(ProfileAction::label).collect();

    loop {
        let idx = Select::new()
            .with_prompt("Perfil")
            .items(&labels)
            .default(0)
            .interact()?;

        match ProfileAction::ALL[idx] {
            ProfileAction::Show => print_user(profile.load().await),
            ProfileAction::Edit => {
                let edited = prompt_profile(profile.load().await)?;
                profile.update(edited);
                println!("Perfil actualizado.");
            }
            ProfileAction::ListContacts => {
                for (i, contact) in contacts.contacts().iter().enumerate() {
                    println!(
                        "{:>2}. {} ({}) {}  {}",
                        i + 1,
                        contact.name,
                        contact.relation,
                        contact.phone,
                        contact.dial_uri()
                    );
                }
            }
            ProfileAction::AddContact => {
                let name = text("Nombre")?;
                let phone = text("Teléfono")?;
                let relations = ContactRelation::all();
                let relation = Select::new()
                    .with_prompt("Relación")
                    .items(relations)
                    .default(0)
                    .interact()?;
                match contacts.add(&name, &phone, relations[relation]) {
                    Ok(contact) => println!("Agregado: {}", contact.name),
                    Err(e) => println!("{e}"),
                }
            }
            ProfileAction::RemoveContact => {
                let names: Vec<&str> = contacts
                    .contacts()
                    .iter()
                    .map(|c| c.name.as_str())
                    .collect();
                if names.is_empty() {
                    println!("No hay contactos.");
                    continue;
                }
                let idx = Select::new()
                    .with_prompt("Eliminar")
                    .items(&names)
                    .interact()?;
                if let Some(removed) = contacts.remove(idx) {
                    println!("Eliminado: {}", removed.name);
                }
            }
            ProfileAction::Back => return Ok(()),
        }
    }
}

fn print_user(user: &User) {
    println!();
    println!("{}", user.full_name);
    println!("  Correo:   {}", user.email);
    println!("  Teléfono: {}", user.phone.as_deref().unwrap_or("-"));
    println!("  Dirección: {}", user.address.as_deref().unwrap_or("-"));
    println!("  Barriada: {}", user.neighborhood.as_deref().unwrap_or("-"));
    println!("  Miembro desde {}", user.join_date().format("%d/%m/%Y"));
}

fn prompt_profile(current: &User) -> Result<User, dialoguer::Error> {
    let mut user = current.clone();
    user.full_name = text_with_default("Nombre completo", &current.full_name)?;
    user.email = text_with_default("Correo electrónico", &current.email)?;
    user.phone = optional_field(&text_with_default(
        "Teléfono",
        current.phone.as_deref().unwrap_or_default(),
    )?);
    user.address = optional_field(&text_with_default(
        "Dirección",
        current.address.as_deref().unwrap_or_default(),
    )?);
    user.neighborhood = optional_field(&text_with_default(
        "Barriada",
        current.neighborhood.as_deref().unwrap_or_default(),
    )?);
    Ok(user)
}
