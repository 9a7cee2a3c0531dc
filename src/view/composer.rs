//! View Composer
//!
//! Owns the selected encoder and turns the matching catalog entry into a
//! [`PageView`]. Rendering reads nothing but the selection and the catalog.

use serde::Serialize;
use std::time::Instant;

use crate::catalog::{content, ContentRecord, EncoderVariant};
use crate::view::code_panel::{Clipboard, CodePanelView, CopyButton};
use crate::view::table::{original_table, transformed_table, TableView};

pub const PAGE_HEADING: &str = "Tutorial Visual de Codificadores de ML";
pub const INTRO_TITLE: &str = "¿Por qué codificar variables categóricas?";
pub const INTRO_BODY: &str = "Los modelos de Machine Learning requieren que toda la entrada sea numérica. La codificación de variables categóricas es el proceso de convertir datos de texto (categorías) en valores numéricos para que los algoritmos puedan procesarlos y aprender de ellos.";
pub const PROS_TITLE: &str = "Ventajas";
pub const CONS_TITLE: &str = "Desventajas";

/// One entry of the navigation strip
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TabView {
    pub id: &'static str,
    pub label: &'static str,
    pub active: bool,
}

/// The content section for the selected encoder
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectionView {
    pub title: &'static str,
    pub description: &'static str,
    /// Original table first, transformed table second
    pub tables: Vec<TableView>,
    pub note: Option<&'static str>,
    pub code: CodePanelView,
    pub pros_title: &'static str,
    pub pros: Vec<&'static str>,
    pub cons_title: &'static str,
    pub cons: Vec<&'static str>,
}

impl SectionView {
    pub fn from_record(record: &'static ContentRecord) -> Self {
        Self {
            title: record.title,
            description: record.description,
            tables: vec![original_table(record), transformed_table(record)],
            note: record.note,
            code: CodePanelView::new(record.code),
            pros_title: PROS_TITLE,
            pros: record.pros.to_vec(),
            cons_title: CONS_TITLE,
            cons: record.cons.to_vec(),
        }
    }
}

/// Full visual tree of the page
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageView {
    pub selected: EncoderVariant,
    pub heading: &'static str,
    pub intro_title: &'static str,
    pub intro_body: &'static str,
    pub tabs: Vec<TabView>,
    pub section: SectionView,
}

#[derive(Debug, Default)]
pub struct ViewComposer {
    selection: EncoderVariant,
    copy_button: CopyButton,
}

impl ViewComposer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selection(&self) -> EncoderVariant {
        self.selection
    }

    pub fn select_variant(&mut self, variant: EncoderVariant) {
        tracing::debug!("Selecting encoder {}", variant);
        self.selection = variant;
    }

    pub fn render(&self) -> PageView {
        let tabs = EncoderVariant::ALL
            .iter()
            .map(|v| TabView {
                id: v.id(),
                label: content(*v).nav_title,
                active: *v == self.selection,
            })
            .collect();

        PageView {
            selected: self.selection,
            heading: PAGE_HEADING,
            intro_title: INTRO_TITLE,
            intro_body: INTRO_BODY,
            tabs,
            section: SectionView::from_record(content(self.selection)),
        }
    }

    /// Copy the selected encoder's snippet
    pub fn copy_code<C: Clipboard + ?Sized>(&mut self, clipboard: &mut C, now: Instant) {
        let code = content(self.selection).code;
        self.copy_button.press(clipboard, code, now);
    }

    pub fn copy_label(&self, now: Instant) -> &'static str {
        self.copy_button.label(now)
    }
}
