use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use common::reasons::{MAX_FORM_DAYS, REASONS};

use super::{AbsenceForm, Msg};

pub fn view(component: &AbsenceForm, ctx: &Context<AbsenceForm>) -> Html {
    let link = ctx.link();
    let form = &component.form;

    let onsubmit = link.callback(|e: SubmitEvent| {
        e.prevent_default();
        Msg::Submit
    });

    html! {
        <form class="absence-form" {onsubmit}>
            <div class="form-grid">
                <div class="field">
                    <label>{ "Nama Guru" }</label>
                    <select
                        onchange={link.callback(|e: Event| {
                            let select: HtmlSelectElement = e.target_unchecked_into();
                            Msg::SetTeacher(select.value())
                        })}
                    >
                        <option value="" selected={form.teacher_id.is_empty()}>{ "-- Pilih Guru --" }</option>
                        {
                            for ctx.props().teachers.iter().map(|t| html! {
                                <option key={t.id.clone()} value={t.id.clone()} selected={form.teacher_id == t.id}>
                                    { t.name.clone() }
                                </option>
                            })
                        }
                    </select>
                </div>

                <div class="field">
                    <label>{ "Tarikh Mula" }</label>
                    <input
                        type="date"
                        placeholder="Pilih Tarikh"
                        value={form.start_date.clone()}
                        onchange={link.callback(|e: Event| {
                            let input: HtmlInputElement = e.target_unchecked_into();
                            Msg::SetStartDate(input.value())
                        })}
                    />
                </div>

                <div class="field">
                    <label>{ "Bilangan Hari" }</label>
                    <select
                        onchange={link.callback(|e: Event| {
                            let select: HtmlSelectElement = e.target_unchecked_into();
                            Msg::SetDays(select.value())
                        })}
                    >
                        <option value="" selected={form.days.is_empty()}>{ "-- Pilih Bilangan Hari --" }</option>
                        {
                            for (1..=MAX_FORM_DAYS).map(|n| {
                                let value = n.to_string();
                                let selected = form.days == value;
                                html! {
                                    <option key={n} selected={selected} value={value}>
                                        { format!("{n} Hari") }
                                    </option>
                                }
                            })
                        }
                    </select>
                </div>

                <div class="field">
                    <label>{ "Sebab" }</label>
                    <select
                        onchange={link.callback(|e: Event| {
                            let select: HtmlSelectElement = e.target_unchecked_into();
                            Msg::SetReason(select.value())
                        })}
                    >
                        <option value="" selected={form.reason.is_empty()}>{ "-- Pilih Sebab --" }</option>
                        {
                            for REASONS.iter().map(|r| html! {
                                <option key={*r} value={*r} selected={form.reason == *r}>{ *r }</option>
                            })
                        }
                    </select>
                </div>
            </div>

            <div class="field">
                <label>{ "Perlu Relief?" }</label>
                <div class="relief-choice">
                    <label class={classes!("choice", "choice-yes", form.need_relief.then_some("checked"))}>
                        <input
                            type="radio"
                            name="needRelief"
                            checked={form.need_relief}
                            onchange={link.callback(|_| Msg::SetNeedRelief(true))}
                        />
                        { "YA" }
                    </label>
                    <label class={classes!("choice", "choice-no", (!form.need_relief).then_some("checked"))}>
                        <input
                            type="radio"
                            name="needRelief"
                            checked={!form.need_relief}
                            onchange={link.callback(|_| Msg::SetNeedRelief(false))}
                        />
                        { "TIDAK" }
                    </label>
                </div>
            </div>

            <div class="field">
                <label>{ "Catatan" }</label>
                <textarea
                    rows="4"
                    placeholder="Nyatakan secara jelas sebab tiada di sekolah atau masa perlu relief..."
                    value={form.remarks.clone()}
                    oninput={link.callback(|e: InputEvent| {
                        let textarea: HtmlTextAreaElement = e.target_unchecked_into();
                        Msg::SetRemarks(textarea.value())
                    })}
                />
            </div>

            <button type="submit" class="submit-btn">{ "HANTAR REKOD" }</button>
        </form>
    }
}
