//! Absence entry form.
//!
//! Holds the in-progress form values, validates them on submit and hands a
//! complete [`AbsenceDraft`] to the parent. The parent turns the draft into a
//! stored record (id, teacher name snapshot, creation time).

use yew::prelude::*;

mod draft;
mod view;

pub use draft::{AbsenceDraft, FormState};

use crate::helpers::alert;
use common::model::teacher::Teacher;

pub const SUBMITTED: &str = "Rekod berjaya ditambah!";

#[derive(Properties, PartialEq, Clone)]
pub struct AbsenceFormProps {
    /// Selectable teachers, already in display order.
    pub teachers: Vec<Teacher>,
    pub on_submit: Callback<AbsenceDraft>,
}

pub enum Msg {
    SetTeacher(String),
    SetStartDate(String),
    SetDays(String),
    SetReason(String),
    SetNeedRelief(bool),
    SetRemarks(String),
    Submit,
}

pub struct AbsenceForm {
    pub form: FormState,
}

impl Component for AbsenceForm {
    type Message = Msg;
    type Properties = AbsenceFormProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            form: FormState::default(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::SetTeacher(id) => self.form.teacher_id = id,
            Msg::SetStartDate(value) => self.form.start_date = value,
            Msg::SetDays(value) => self.form.days = value,
            Msg::SetReason(value) => self.form.reason = value,
            Msg::SetNeedRelief(value) => self.form.need_relief = value,
            Msg::SetRemarks(value) => self.form.remarks = value,
            Msg::Submit => match self.form.validate() {
                Ok(draft) => {
                    ctx.props().on_submit.emit(draft);
                    self.form = FormState::default();
                    alert(SUBMITTED);
                }
                Err(missing) => {
                    alert(missing);
                    return false;
                }
            },
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
