//! Roster management: add teachers by name and remove them.

use web_sys::HtmlInputElement;
use yew::prelude::*;

use common::model::teacher::Teacher;

use crate::helpers::confirm;

pub const CONFIRM_DELETE: &str = "Padam guru ini?";

#[derive(Properties, PartialEq, Clone)]
pub struct RosterProps {
    /// Teachers in alphabetical order.
    pub teachers: Vec<Teacher>,
    /// Receives a trimmed, non-empty name.
    pub on_add: Callback<String>,
    pub on_delete: Callback<String>,
}

pub enum Msg {
    SetName(String),
    Add,
    Delete(String),
}

pub struct Roster {
    name: String,
}

/// The name to register, if the input holds anything besides whitespace.
pub fn normalized_name(input: &str) -> Option<String> {
    let name = input.trim();
    (!name.is_empty()).then(|| name.to_string())
}

impl Component for Roster {
    type Message = Msg;
    type Properties = RosterProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            name: String::new(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::SetName(name) => {
                self.name = name;
                true
            }
            Msg::Add => {
                if let Some(name) = normalized_name(&self.name) {
                    ctx.props().on_add.emit(name);
                }
                self.name.clear();
                true
            }
            Msg::Delete(id) => {
                if confirm(CONFIRM_DELETE) {
                    ctx.props().on_delete.emit(id);
                }
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let teachers = &ctx.props().teachers;

        html! {
            <div class="roster">
                <form
                    class="add-teacher"
                    onsubmit={link.callback(|e: SubmitEvent| {
                        e.prevent_default();
                        Msg::Add
                    })}
                >
                    <input
                        type="text"
                        placeholder="Masukkan nama guru baru..."
                        value={self.name.clone()}
                        oninput={link.callback(|e: InputEvent| {
                            let input: HtmlInputElement = e.target_unchecked_into();
                            Msg::SetName(input.value())
                        })}
                    />
                    <button type="submit" class="add-btn">{ "Tambah Guru" }</button>
                </form>

                <div class="roster-list-header">
                    <h3>{ format!("Senarai Guru ({})", teachers.len()) }</h3>
                    <span class="hint">{ "Klik butang padam untuk membuang guru" }</span>
                </div>
                <div class="roster-grid">
                    {
                        for teachers.iter().map(|teacher| {
                            let id = teacher.id.clone();
                            html! {
                                <div class="roster-item" key={teacher.id.clone()}>
                                    <span>{ teacher.name.clone() }</span>
                                    <button
                                        class="delete-btn"
                                        title="Padam"
                                        onclick={link.callback(move |_| Msg::Delete(id.clone()))}
                                    >
                                        { "Padam" }
                                    </button>
                                </div>
                            }
                        })
                    }
                </div>
            </div>
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_are_trimmed() {
        assert_eq!(
            normalized_name("  Cg. Siti binti Omar \n"),
            Some("Cg. Siti binti Omar".to_string())
        );
    }

    #[test]
    fn blank_names_are_ignored() {
        assert_eq!(normalized_name(""), None);
        assert_eq!(normalized_name("   "), None);
    }
}
