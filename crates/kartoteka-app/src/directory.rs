// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use crate::forms::{FormField, OrganizationForm};
use crate::ids::OrgId;
use crate::model::{Organization, SortDirection, SortKey};

pub const PAGE_SIZE: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    pub query: String,
    pub sort_key: SortKey,
    pub sort_direction: SortDirection,
    pub page: usize,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            query: String::new(),
            sort_key: SortKey::Name,
            sort_direction: SortDirection::Asc,
            page: 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Editor {
    pub target: Option<OrgId>,
    pub form: OrganizationForm,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Directory {
    pub items: Vec<Organization>,
    pub view: ViewState,
    pub editor: Option<Editor>,
    pub status_line: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DirectoryCommand {
    SetQuery(String),
    ToggleSort(SortKey),
    PrevPage,
    NextPage,
    OpenCreate,
    RowActivated(OrgId),
    DeleteRequested(OrgId),
    SetFormField { field: FormField, value: String },
    CancelForm,
    Submit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DirectoryStatus {
    SortAsc(&'static str),
    SortDesc(&'static str),
    Added(String),
    Updated(String),
    Removed(String),
    FormInvalid(String),
}

impl DirectoryStatus {
    pub fn message(self) -> String {
        match self {
            Self::SortAsc(column) => format!("sort {column} asc"),
            Self::SortDesc(column) => format!("sort {column} desc"),
            Self::Added(name) => format!("added {name}"),
            Self::Updated(name) => format!("updated {name}"),
            Self::Removed(name) => format!("removed {name}"),
            Self::FormInvalid(error) => format!("form invalid: {error}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DirectoryEvent {
    QueryChanged(String),
    SortChanged(SortKey, SortDirection),
    PageChanged(usize),
    FormOpened { target: Option<OrgId> },
    FormFieldChanged(FormField),
    FormClosed,
    Created(OrgId),
    Updated(OrgId),
    Removed(OrgId),
    Status(DirectoryStatus),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageView {
    pub items: Vec<Organization>,
    pub page: usize,
    pub total_pages: usize,
}

impl PageView {
    pub fn label(&self) -> String {
        format!("{} из {}", self.page, self.total_pages)
    }
}

pub fn derive_page(items: &[Organization], view: &ViewState) -> PageView {
    let filtered = filter_items(items, &view.query);
    let sorted = sort_items(filtered, view.sort_key, view.sort_direction);
    paginate(sorted, view.page)
}

fn filter_items<'a>(items: &'a [Organization], query: &str) -> Vec<&'a Organization> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return items.iter().collect();
    }
    items
        .iter()
        .filter(|organization| organization.director.to_lowercase().contains(&needle))
        .collect()
}

fn sort_items(
    mut items: Vec<&Organization>,
    key: SortKey,
    direction: SortDirection,
) -> Vec<&Organization> {
    // Stable sort: equal keys keep insertion order in both directions.
    items.sort_by(|a, b| {
        let ordering = key.field(a).to_lowercase().cmp(&key.field(b).to_lowercase());
        match direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });
    items
}

fn paginate(sorted: Vec<&Organization>, page: usize) -> PageView {
    let total_pages = total_pages(sorted.len());
    let page = page.clamp(1, total_pages);
    let start = (page - 1) * PAGE_SIZE;
    let items = sorted
        .into_iter()
        .skip(start)
        .take(PAGE_SIZE)
        .cloned()
        .collect();
    PageView {
        items,
        page,
        total_pages,
    }
}

fn total_pages(count: usize) -> usize {
    count.div_ceil(PAGE_SIZE).max(1)
}

impl Directory {
    pub fn new(items: Vec<Organization>) -> Self {
        Self {
            items,
            view: ViewState::default(),
            editor: None,
            status_line: None,
        }
    }

    pub fn page_view(&self) -> PageView {
        derive_page(&self.items, &self.view)
    }

    pub fn can_submit(&self) -> bool {
        self.editor
            .as_ref()
            .is_some_and(|editor| editor.form.is_complete())
    }

    pub fn form_title(&self) -> Option<String> {
        let editor = self.editor.as_ref()?;
        match editor.target {
            None => Some("Добавить организацию".to_owned()),
            Some(target) => {
                let name = self
                    .find(target)
                    .map(|index| self.items[index].name.as_str())
                    .unwrap_or(&editor.form.name);
                Some(format!("Редактировать организацию {name}"))
            }
        }
    }

    pub fn dispatch(&mut self, command: DirectoryCommand) -> Vec<DirectoryEvent> {
        match command {
            DirectoryCommand::SetQuery(query) => {
                self.view.query = query;
                let mut events = vec![DirectoryEvent::QueryChanged(self.view.query.clone())];
                if self.view.page != 1 {
                    self.view.page = 1;
                    events.push(DirectoryEvent::PageChanged(1));
                }
                events
            }
            DirectoryCommand::ToggleSort(key) => {
                if self.view.sort_key == key {
                    self.view.sort_direction = self.view.sort_direction.flipped();
                } else {
                    self.view.sort_key = key;
                    self.view.sort_direction = SortDirection::Asc;
                }
                let status = match self.view.sort_direction {
                    SortDirection::Asc => DirectoryStatus::SortAsc(key.name()),
                    SortDirection::Desc => DirectoryStatus::SortDesc(key.name()),
                };
                vec![
                    DirectoryEvent::SortChanged(self.view.sort_key, self.view.sort_direction),
                    self.set_status(status),
                ]
            }
            DirectoryCommand::PrevPage => {
                if self.view.page > 1 {
                    self.view.page -= 1;
                    vec![DirectoryEvent::PageChanged(self.view.page)]
                } else {
                    Vec::new()
                }
            }
            DirectoryCommand::NextPage => {
                let total = total_pages(filter_items(&self.items, &self.view.query).len());
                if self.view.page < total {
                    self.view.page += 1;
                    vec![DirectoryEvent::PageChanged(self.view.page)]
                } else {
                    Vec::new()
                }
            }
            DirectoryCommand::OpenCreate => {
                self.editor = Some(Editor {
                    target: None,
                    form: OrganizationForm::blank(),
                });
                vec![DirectoryEvent::FormOpened { target: None }]
            }
            DirectoryCommand::RowActivated(id) => {
                let Some(index) = self.find(id) else {
                    return Vec::new();
                };
                self.editor = Some(Editor {
                    target: Some(id),
                    form: OrganizationForm::from_organization(&self.items[index]),
                });
                vec![DirectoryEvent::FormOpened { target: Some(id) }]
            }
            DirectoryCommand::DeleteRequested(id) => {
                let Some(index) = self.find(id) else {
                    return Vec::new();
                };
                let removed = self.items.remove(index);
                let mut events = vec![DirectoryEvent::Removed(id)];
                events.extend(self.clamp_page());
                events.push(self.set_status(DirectoryStatus::Removed(removed.name)));
                events
            }
            DirectoryCommand::SetFormField { field, value } => {
                let Some(editor) = self.editor.as_mut() else {
                    return Vec::new();
                };
                *editor.form.field_mut(field) = value;
                vec![DirectoryEvent::FormFieldChanged(field)]
            }
            DirectoryCommand::CancelForm => {
                if self.editor.take().is_some() {
                    vec![DirectoryEvent::FormClosed]
                } else {
                    Vec::new()
                }
            }
            DirectoryCommand::Submit => self.submit(),
        }
    }

    fn submit(&mut self) -> Vec<DirectoryEvent> {
        let Some(editor) = self.editor.as_ref() else {
            return Vec::new();
        };
        if let Err(error) = editor.form.validate() {
            return vec![self.set_status(DirectoryStatus::FormInvalid(error.to_string()))];
        }

        let target = editor.target;
        let form = editor.form.trimmed();
        self.editor = None;

        match target {
            Some(id) => {
                let Some(index) = self.find(id) else {
                    // Edit target vanished (deleted mid-edit): drop the form
                    // without storing anything, matching remove's silence.
                    return vec![DirectoryEvent::FormClosed];
                };
                let updated = form.into_organization(id);
                let name = updated.name.clone();
                self.items[index] = updated;
                let mut events = vec![DirectoryEvent::Updated(id), DirectoryEvent::FormClosed];
                events.extend(self.clamp_page());
                events.push(self.set_status(DirectoryStatus::Updated(name)));
                events
            }
            None => {
                let id = OrgId::generate();
                let created = form.into_organization(id);
                let name = created.name.clone();
                self.items.push(created);
                let mut events = vec![DirectoryEvent::Created(id), DirectoryEvent::FormClosed];
                events.extend(self.clamp_page());
                events.push(self.set_status(DirectoryStatus::Added(name)));
                events
            }
        }
    }

    fn find(&self, id: OrgId) -> Option<usize> {
        self.items.iter().position(|organization| organization.id == id)
    }

    fn clamp_page(&mut self) -> Option<DirectoryEvent> {
        let total = total_pages(filter_items(&self.items, &self.view.query).len());
        let clamped = self.view.page.clamp(1, total);
        if clamped == self.view.page {
            return None;
        }
        self.view.page = clamped;
        Some(DirectoryEvent::PageChanged(clamped))
    }

    fn set_status(&mut self, status: DirectoryStatus) -> DirectoryEvent {
        self.status_line = Some(status.clone().message());
        DirectoryEvent::Status(status)
    }
}
