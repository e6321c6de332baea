use anyhow::Result;
use axum::extract::Multipart;
use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use log::{info, warn};
use truckload::err::SolveError;
use truckload::io::{export, import, read_workbook, write_workbook};
use truckload::solve::solve;

const XLSX_MIME: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";
const DOWNLOAD_NAME: &str = "attachment; filename=\"Optimal Loading plan.xlsx\"";

const FORM_HTML: &str = r#"<!DOCTYPE html>
<html>
<head><title>Truck Loader</title></head>
<body>
  <h1>Truck Loader</h1>
  <p>Upload a workbook with a shipments sheet and a trucks sheet to receive an
  optimal loading plan.</p>
  <form method="post" enctype="multipart/form-data">
    <input type="file" name="file" accept=".xlsx"/>
    <button type="submit">Compute loading plan</button>
  </form>
</body>
</html>"#;

/// GET `/`: the upload form.
pub async fn form() -> Html<&'static str> {
    Html(FORM_HTML)
}

/// POST `/`: runs one solve for the uploaded workbook and streams the plan
/// workbook back as a download. A request without a file is not an error and
/// just gets the form again.
pub async fn upload(mut multipart: Multipart) -> Response {
    let mut file_bytes = None;
    loop {
        match multipart.next_field().await {
            Ok(Some(field)) => {
                if field.name() == Some("file") {
                    match field.bytes().await {
                        Ok(bytes) if !bytes.is_empty() => file_bytes = Some(bytes),
                        Ok(_) => {}
                        Err(e) => {
                            return error_page(
                                StatusCode::BAD_REQUEST,
                                &format!("could not read the uploaded file: {e}"),
                            );
                        }
                    }
                }
            }
            Ok(None) => break,
            Err(e) => {
                return error_page(
                    StatusCode::BAD_REQUEST,
                    &format!("invalid upload request: {e}"),
                );
            }
        }
    }

    let Some(bytes) = file_bytes else {
        return Html(FORM_HTML).into_response();
    };

    info!("received workbook upload ({} bytes)", bytes.len());

    // each request owns its model end to end; spawn_blocking keeps the
    // synchronous solver off the async executor
    let result = tokio::task::spawn_blocking(move || plan_workbook(&bytes)).await;

    match result {
        Ok(Ok(workbook)) => (
            [
                (header::CONTENT_TYPE, XLSX_MIME),
                (header::CONTENT_DISPOSITION, DOWNLOAD_NAME),
            ],
            workbook,
        )
            .into_response(),
        Ok(Err(e)) => {
            warn!("solve request failed: {e:#}");
            match e.downcast_ref::<SolveError>() {
                Some(SolveError::MalformedInput(_)) => {
                    error_page(StatusCode::BAD_REQUEST, &e.to_string())
                }
                Some(SolveError::Infeasible) => {
                    error_page(StatusCode::UNPROCESSABLE_ENTITY, &e.to_string())
                }
                _ => error_page(StatusCode::INTERNAL_SERVER_ERROR, "internal error"),
            }
        }
        Err(e) => {
            warn!("solve task panicked: {e}");
            error_page(StatusCode::INTERNAL_SERVER_ERROR, "internal error")
        }
    }
}

/// The full pipeline for one upload: parse, import, solve, serialize.
fn plan_workbook(bytes: &[u8]) -> Result<Vec<u8>> {
    let ext_dataset = read_workbook(bytes)?;
    let dataset = import(&ext_dataset)?;
    let plan = solve(&dataset)?;
    write_workbook(&export(&dataset, &plan))
}

fn error_page(status: StatusCode, message: &str) -> Response {
    let body = format!(
        "<!DOCTYPE html>\n<html><body><h1>Truck Loader</h1>\
         <p>{message}</p><p><a href=\"/\">Back to the upload form</a></p></body></html>"
    );
    (status, Html(body)).into_response()
}
