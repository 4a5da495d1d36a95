//! The single linear session.
//!
//! One run walks prompt → validate → resolve user → prompt skills and
//! location → persist → match → narrate. Validation failures self-loop at
//! the prompt; everything else is a straight line. The store is saved
//! before matching, so a narration failure never rolls back the profile.

use std::io::{BufRead, Write};

use anyhow::Result;

use crate::catalog::Catalog;
use crate::matcher::matching_listings;
use crate::narrator::Narrator;
use crate::prompt::{read_line, read_until};
use crate::render;
use crate::spinner::Spinner;
use crate::store::UserStore;
use crate::validate::{capitalize, is_valid_name, is_valid_phone, parse_skills};

/// One interactive run against a store, a catalog, and a narrator.
pub struct Session<'a, R, W> {
    input: R,
    output: W,
    store: &'a mut UserStore,
    catalog: &'a Catalog,
    narrator: &'a dyn Narrator,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    pub fn new(
        input: R,
        output: W,
        store: &'a mut UserStore,
        catalog: &'a Catalog,
        narrator: &'a dyn Narrator,
    ) -> Self {
        Self {
            input,
            output,
            store,
            catalog,
            narrator,
        }
    }

    /// Run the session to completion and return the narrated reply.
    pub async fn run(&mut self) -> Result<String> {
        let typed_name = capitalize(&read_until(
            &mut self.input,
            &mut self.output,
            "👤 Enter your name: ",
            "❌ Invalid name. Enter alphabets only: ",
            is_valid_name,
        )?);

        let phone = read_until(
            &mut self.input,
            &mut self.output,
            "📱 Enter your 10-digit phone number: ",
            "❌ Please enter a valid 10-digit phone number starting with 6-9: ",
            is_valid_phone,
        )?;

        // A known phone number wins over the freshly typed name
        let (mut profile, returning) = self.store.resolve_or_create(&phone, &typed_name);
        if returning {
            writeln!(self.output, "✅ Welcome back, {}!", profile.name)?;
        }

        let skills_line = read_line(
            &mut self.input,
            &mut self.output,
            "💡 Enter your skills (comma separated): ",
        )?;
        profile.skills = parse_skills(&skills_line);

        let location = read_line(
            &mut self.input,
            &mut self.output,
            "📍 Preferred internship location: ",
        )?;
        profile.location = capitalize(&location);

        self.store.commit(&profile)?;

        let matches = matching_listings(&profile, self.catalog);
        let results = render::matches_text(&matches);

        let spinner = Spinner::start("phrasing your matches");
        let reply = self.narrator.narrate(&profile, &results).await;
        spinner.stop().await;

        reply
    }
}
