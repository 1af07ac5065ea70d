use crate::config::AppConfig;
use crate::error::AppError;
use crate::models::{Event, Modality};
use crate::services::draft_builder;
use crate::services::unit_converter::format_base_units;
use crate::services::upload_service::AppUploadTracker;
use crate::services::{EventDraftBuilder, LocalLedger, TicketTierSynchronizer};
use dioxus::prelude::*;
use ipfs_upload::{MediaFile, UploadState, UploadStatus};

/// Reads every file picked in a file input, skipping unreadable ones
async fn read_files(evt: &FormEvent) -> Vec<MediaFile> {
    let mut files = Vec::new();
    for file in evt.files() {
        match file.read_bytes().await {
            Ok(bytes) => files.push(MediaFile::new(file.name(), bytes.to_vec())),
            Err(e) => log::error!("Could not read {}: {}", file.name(), e),
        }
    }
    files
}

fn upload_label(state: &UploadState) -> String {
    match state.status {
        UploadStatus::Idle => String::new(),
        UploadStatus::Uploading => "Uploading...".to_string(),
        UploadStatus::Succeeded => match &state.error_message {
            Some(msg) => format!("{} file(s) uploaded, {}", state.urls.len(), msg),
            None => format!("{} file(s) uploaded", state.urls.len()),
        },
        UploadStatus::Failed => format!(
            "Upload failed: {}",
            state.error_message.as_deref().unwrap_or("unknown error")
        ),
    }
}

#[component]
pub fn NewEventScreen(on_created: EventHandler<Event>) -> Element {
    let config = use_context::<AppConfig>();
    let ledger = use_context::<LocalLedger>();
    let tracker = use_context::<AppUploadTracker>();

    let organizer = config.organizer().map(str::to_string);
    let mut builder = use_signal({
        let organizer = organizer.clone().unwrap_or_default();
        move || EventDraftBuilder::new(organizer)
    });
    let mut tiers = use_signal(TicketTierSynchronizer::new);
    let mut banner = use_signal(UploadState::default);
    let mut ticket_banners = use_signal(UploadState::default);
    let mut error_message = use_signal(|| None::<String>);
    let mut submitting = use_signal(|| false);

    let Some(organizer) = organizer else {
        return rsx! {
            div { class: "container",
                h2 { "Create Event" }
                p { class: "hint", "Connect your wallet to create an event." }
            }
        };
    };

    let banner_tracker = tracker.clone();
    let on_banner = move |evt: FormEvent| {
        let tracker = banner_tracker.clone();
        async move {
            let Some(file) = read_files(&evt).await.into_iter().next() else {
                return;
            };
            let slot = banner.read().clone();
            match tracker
                .upload_single(&slot, file, |state| banner.set(state))
                .await
            {
                Ok(_) => error_message.set(None),
                Err(e) => error_message.set(Some(AppError::from(e).user_message())),
            }
        }
    };

    let on_ticket_banners = move |evt: FormEvent| {
        let tracker = tracker.clone();
        async move {
            let files = read_files(&evt).await;
            if files.is_empty() {
                return;
            }
            let slot = ticket_banners.read().clone();
            tracker
                .upload_many(&slot, files, |state| ticket_banners.set(state))
                .await;
        }
    };

    let on_submit = move |_| {
        let ledger = ledger.clone();
        async move {
            if submitting() {
                return;
            }
            let built = builder
                .read()
                .build(&tiers.read(), &banner.read(), &ticket_banners.read());
            let draft = match built {
                Ok(draft) => draft,
                Err(e) => {
                    error_message.set(Some(AppError::from(e).user_message()));
                    return;
                }
            };

            submitting.set(true);
            error_message.set(None);
            let today = chrono::Local::now().date_naive();
            let result = draft_builder::submit(&ledger, draft, today).await;
            submitting.set(false);

            match result {
                Ok(event) => on_created.call(event),
                Err(e) => {
                    log::error!("Event submission failed: {}", e);
                    error_message.set(Some(e.user_message()));
                }
            }
        }
    };

    let form = builder.read().clone();
    let modality = form.modality;
    let (capacity_text, type_text, price_text) = {
        let t = tiers.read();
        (
            t.capacity_text().to_string(),
            t.type_text().to_string(),
            t.price_text().to_string(),
        )
    };
    let tier_error = tiers.read().first_error().map(|e| e.to_string());
    let tier_preview = tiers.read().tiers().unwrap_or_default();
    let banner_status = upload_label(&banner.read());
    let banner_preview = banner.read().first_url().map(str::to_string);
    let ticket_banner_status = upload_label(&ticket_banners.read());
    let busy = submitting() || banner.read().is_uploading() || ticket_banners.read().is_uploading();

    rsx! {
        div { class: "container",
            h2 { "Create Event" }
            p { class: "hint", "Organizer: {organizer}" }

            if let Some(error) = error_message() {
                div { class: "error-message", "{error}" }
            }

            div { class: "form-group",
                label { "Event Name" }
                input {
                    r#type: "text",
                    value: "{form.name}",
                    oninput: move |e| builder.write().name = e.value(),
                }
            }

            div { class: "form-group",
                label { "Description" }
                textarea {
                    value: "{form.description}",
                    oninput: move |e| builder.write().description = e.value(),
                }
            }

            div { class: "form-group",
                label { "Banner" }
                input { r#type: "file", accept: "image/*", onchange: on_banner }
                if !banner_status.is_empty() {
                    p { class: "hint", "{banner_status}" }
                }
                if let Some(url) = banner_preview {
                    img { class: "preview", src: "{url}", alt: "Banner preview" }
                }
            }

            div { class: "form-row",
                div { class: "form-group",
                    label { "Date" }
                    input {
                        r#type: "date",
                        value: "{form.date}",
                        oninput: move |e| builder.write().date = e.value(),
                    }
                }
                div { class: "form-group",
                    label { "Time" }
                    input {
                        r#type: "time",
                        value: "{form.time}",
                        oninput: move |e| builder.write().time = e.value(),
                    }
                }
            }

            div { class: "form-group",
                label { "Modality" }
                select {
                    value: modality.as_u8().to_string(),
                    onchange: move |e| {
                        let value = e.value().parse::<u8>().unwrap_or_default();
                        builder.write().modality = Modality::from_u8(value);
                    },
                    for option_modality in [Modality::Unspecified, Modality::Physical] {
                        option {
                            value: option_modality.as_u8().to_string(),
                            {option_modality.display_name().to_string()}
                        }
                    }
                }
            }

            if modality.requires_location() {
                div { class: "form-group",
                    label { "Location" }
                    input {
                        r#type: "text",
                        value: "{form.location}",
                        oninput: move |e| builder.write().location = e.value(),
                    }
                }
            }

            h3 { "Tickets" }
            p { class: "hint", "Comma separated, one entry per ticket tier" }

            div { class: "form-group",
                label { "Capacity" }
                input {
                    r#type: "text",
                    placeholder: "100,400,1000",
                    value: "{capacity_text}",
                    oninput: move |e| tiers.write().set_capacity_text(e.value()),
                }
            }
            div { class: "form-group",
                label { "Ticket Types" }
                input {
                    r#type: "text",
                    placeholder: "VIP,GENERAL",
                    value: "{type_text}",
                    oninput: move |e| tiers.write().set_type_text(e.value()),
                }
            }
            div { class: "form-group",
                label { "Prices (NEAR)" }
                input {
                    r#type: "text",
                    placeholder: "20,16,10",
                    value: "{price_text}",
                    oninput: move |e| tiers.write().set_price_text(e.value()),
                }
            }
            if let Some(error) = tier_error {
                p { class: "field-error", "{error}" }
            }
            if !tier_preview.is_empty() {
                ul { class: "tier-preview",
                    for tier in tier_preview {
                        li {
                            {format!("{}: {} × {} NEAR", tier.ticket_type, tier.capacity, format_base_units(tier.price))}
                        }
                    }
                }
            }

            div { class: "form-group",
                label { "Ticket Banners" }
                input {
                    r#type: "file",
                    accept: "image/*",
                    multiple: true,
                    onchange: on_ticket_banners,
                }
                if !ticket_banner_status.is_empty() {
                    p { class: "hint", "{ticket_banner_status}" }
                }
            }

            button {
                class: "btn-primary",
                disabled: busy,
                onclick: on_submit,
                if submitting() { "Creating..." } else { "Create Event" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upload_label() {
        assert_eq!(upload_label(&UploadState::default()), "");
        assert_eq!(
            upload_label(&UploadState::default().begin()),
            "Uploading..."
        );
        assert_eq!(
            upload_label(&UploadState::succeed(
                vec!["a".to_string(), "b".to_string()],
                Some("1 of 3 uploads failed".to_string())
            )),
            "2 file(s) uploaded, 1 of 3 uploads failed"
        );
        assert_eq!(
            upload_label(&UploadState::default().fail("timeout".to_string())),
            "Upload failed: timeout"
        );
    }
}
