use crate::error::{Result, StoreError};
use agenda_core::{Contact, ContactId};
use rusqlite::{params, Connection};
use std::str::FromStr;

/// Field values for an insert or an in-place replacement.
#[derive(Debug, Clone, Default)]
pub struct ContactNew {
    pub name: String,
    pub surname: String,
    pub email: String,
    pub phone: String,
}

pub struct ContactsRepo<'a> {
    conn: &'a Connection,
}

impl<'a> ContactsRepo<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    pub fn create(&self, now_ms: i64, input: ContactNew) -> Result<Contact> {
        let contact = Contact {
            id: ContactId::new(),
            name: input.name,
            surname: input.surname,
            email: input.email,
            phone: input.phone,
            created_at: now_ms,
        };

        self.conn.execute(
            "INSERT INTO contacts (id, name, surname, email, phone, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6);",
            params![
                contact.id.to_string(),
                contact.name,
                contact.surname,
                contact.email,
                contact.phone,
                contact.created_at,
            ],
        )?;

        Ok(contact)
    }

    pub fn get(&self, id: ContactId) -> Result<Option<Contact>> {
        get_inner(self.conn, id)
    }

    /// All contacts, newest first. One-shot query.
    pub fn list_all(&self) -> Result<Vec<Contact>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, name, surname, email, phone, created_at
             FROM contacts
             ORDER BY created_at DESC;",
        )?;
        let mut rows = stmt.query([])?;
        let mut contacts = Vec::new();
        while let Some(row) = rows.next()? {
            contacts.push(contact_from_row(row)?);
        }
        Ok(contacts)
    }

    /// Replace the business fields of an existing record, keeping its
    /// creation timestamp. `None` when no row matched.
    pub fn update(&self, id: ContactId, input: ContactNew) -> Result<Option<Contact>> {
        let tx = self.conn.unchecked_transaction()?;
        let changed = tx.execute(
            "UPDATE contacts SET name = ?2, surname = ?3, email = ?4, phone = ?5
             WHERE id = ?1;",
            params![
                id.to_string(),
                input.name,
                input.surname,
                input.email,
                input.phone,
            ],
        )?;
        let contact = if changed == 0 {
            None
        } else {
            get_inner(&tx, id)?
        };
        tx.commit()?;
        Ok(contact)
    }

    /// Delete the matching record and return it, `None` when absent.
    pub fn delete(&self, id: ContactId) -> Result<Option<Contact>> {
        let tx = self.conn.unchecked_transaction()?;
        let contact = get_inner(&tx, id)?;
        if contact.is_some() {
            tx.execute("DELETE FROM contacts WHERE id = ?1;", [id.to_string()])?;
        }
        tx.commit()?;
        Ok(contact)
    }
}

fn get_inner(conn: &Connection, id: ContactId) -> Result<Option<Contact>> {
    let mut stmt = conn.prepare(
        "SELECT id, name, surname, email, phone, created_at
         FROM contacts WHERE id = ?1;",
    )?;
    let mut rows = stmt.query([id.to_string()])?;
    if let Some(row) = rows.next()? {
        Ok(Some(contact_from_row(row)?))
    } else {
        Ok(None)
    }
}

fn contact_from_row(row: &rusqlite::Row<'_>) -> Result<Contact> {
    let id_str: String = row.get(0)?;
    let id = ContactId::from_str(&id_str).map_err(|_| StoreError::InvalidId(id_str.clone()))?;
    Ok(Contact {
        id,
        name: row.get(1)?,
        surname: row.get(2)?,
        email: row.get(3)?,
        phone: row.get(4)?,
        created_at: row.get(5)?,
    })
}
