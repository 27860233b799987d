//! Personal emergency contacts.

use alerta_vecinal_account_models::{ContactRelation, EmergencyContact};

use crate::ContactError;

/// The user's emergency contact list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmergencyContacts {
    contacts: Vec<EmergencyContact>,
}

impl Default for EmergencyContacts {
    fn default() -> Self {
        Self {
            contacts: vec![
                EmergencyContact::new("Policía Nacional", "104", ContactRelation::Emergency),
                EmergencyContact::new("Bomberos", "103", ContactRelation::Emergency),
                EmergencyContact::new("Familiares", "+507 6123-4567", ContactRelation::Family),
            ],
        }
    }
}

impl EmergencyContacts {
    /// Appends a contact.
    ///
    /// # Errors
    ///
    /// * [`ContactError::MissingName`] if `name` is empty
    /// * [`ContactError::MissingPhone`] if `phone` is empty
    pub fn add(
        &mut self,
        name: &str,
        phone: &str,
        relation: ContactRelation,
    ) -> Result<&EmergencyContact, ContactError> {
        if name.is_empty() {
            return Err(ContactError::MissingName);
        }
        if phone.is_empty() {
            return Err(ContactError::MissingPhone);
        }
        self.contacts
            .push(EmergencyContact::new(name, phone, relation));
        Ok(&self.contacts[self.contacts.len() - 1])
    }

    /// Removes the contact at `index`, if any.
    pub fn remove(&mut self, index: usize) -> Option<EmergencyContact> {
        (index < self.contacts.len()).then(|| self.contacts.remove(index))
    }

    #[must_use]
    pub fn contacts(&self) -> &[EmergencyContact] {
        &self.contacts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_include_national_services() {
        let contacts = EmergencyContacts::default();
        let phones: Vec<&str> = contacts.contacts().iter().map(|c| c.phone.as_str()).collect();
        assert_eq!(phones, vec!["104", "103", "+507 6123-4567"]);
    }

    #[test]
    fn add_requires_name_and_phone() {
        let mut contacts = EmergencyContacts::default();
        assert_eq!(
            contacts.add("", "6000-0000", ContactRelation::Neighbor),
            Err(ContactError::MissingName)
        );
        assert_eq!(
            contacts.add("Ana", "", ContactRelation::Neighbor),
            Err(ContactError::MissingPhone)
        );
        let added = contacts
            .add("Ana", "6000-0000", ContactRelation::Neighbor)
            .unwrap();
        assert_eq!(added.relation, ContactRelation::Neighbor);
        assert_eq!(contacts.contacts().len(), 4);
    }

    #[test]
    fn remove_by_index() {
        let mut contacts = EmergencyContacts::default();
        assert_eq!(contacts.remove(1).map(|c| c.name), Some("Bomberos".to_string()));
        assert!(contacts.remove(10).is_none());
        assert_eq!(contacts.contacts().len(), 2);
    }
}
