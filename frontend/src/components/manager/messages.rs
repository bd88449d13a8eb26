use super::{ManagedResource, Rows, Setter, Slot};
use crate::api::ApiError;
use crate::forms::UploadKind;

pub enum Msg<R: ManagedResource> {
    Loaded(Result<Vec<R>, ApiError>),
    Refresh,
    SetFilter(String),
    SetPage(usize),
    OpenCreate,
    OpenEdit(u64),
    RequestClose,
    CloseForm,
    Patch(Setter<R>),
    RowAdd(Rows<R>),
    RowRemove(Rows<R>, usize),
    RowEdit(Rows<R>, usize, String),
    FileChosen {
        kind: UploadKind,
        label: &'static str,
        slot: Slot<R>,
        file: web_sys::File,
    },
    PreviewReady {
        slot: Slot<R>,
        preview: String,
    },
    Submit,
    Submitted(Result<(), ApiError>),
    AskDelete(u64),
    CancelDelete,
    ConfirmDelete,
    Deleted(Result<(), ApiError>),
    ToggleStatus(u64),
    Toggled(Result<(), ApiError>),
}
