use crate::configuration::AssetSettings;
use crate::constant::FRONTEND_INDEX;
use crate::error::AssetError;
use actix_files::{Files, NamedFile};
use actix_web::dev::{fn_service, ServiceRequest, ServiceResponse};
use actix_web::http::header::{ContentDisposition, DispositionParam, DispositionType};
use actix_web::{web, HttpRequest, HttpResponse};
use std::io::ErrorKind;
use std::path::Path;

#[tracing::instrument(name = "Download resume", skip(request, assets))]
pub async fn download_resume(
    request: HttpRequest,
    assets: web::Data<AssetSettings>,
) -> Result<HttpResponse, AssetError> {
    let file = open_asset(&assets.resume_path)
        .await?
        .set_content_disposition(ContentDisposition {
            disposition: DispositionType::Attachment,
            parameters: vec![DispositionParam::Filename(
                assets.resume_download_name.clone(),
            )],
        });
    Ok(file.into_response(&request))
}

/// Range requests are honoured by `NamedFile`, so players can seek.
#[tracing::instrument(name = "Stream video", skip(request, assets))]
pub async fn stream_video(
    request: HttpRequest,
    filename: web::Path<String>,
    assets: web::Data<AssetSettings>,
) -> Result<HttpResponse, AssetError> {
    let filename = filename.into_inner();
    if !is_plain_file_name(&filename) {
        tracing::warn!("Refused video name {:?}", filename);
        return Err(AssetError::InvalidFileName(filename));
    }
    let file = open_asset(&assets.video_dir.join(&filename)).await?;
    Ok(file.into_response(&request))
}

/// Serve the frontend from disk, falling back to `index.html` for client-side routes.
pub fn frontend_files(frontend_dir: &Path) -> Files {
    let index = frontend_dir.join(FRONTEND_INDEX);
    Files::new("/", frontend_dir)
        .index_file(FRONTEND_INDEX)
        .default_handler(fn_service(move |req: ServiceRequest| {
            let index = index.clone();
            async move {
                let (request, _) = req.into_parts();
                let response = match open_asset(&index).await {
                    Ok(file) => file.into_response(&request),
                    Err(e) => actix_web::ResponseError::error_response(&e),
                };
                Ok::<_, actix_web::Error>(ServiceResponse::new(request, response))
            }
        }))
}

async fn open_asset(path: &Path) -> Result<NamedFile, AssetError> {
    NamedFile::open_async(path).await.map_err(|e| {
        let shown = path.display().to_string();
        if e.kind() == ErrorKind::NotFound {
            tracing::warn!("Asset not found: {}", shown);
            AssetError::NotFound(shown)
        } else {
            tracing::error!("Failed to open asset {}: {:?}", shown, e);
            AssetError::Io(shown, e)
        }
    })
}

fn is_plain_file_name(name: &str) -> bool {
    !name.is_empty()
        && name != "."
        && name != ".."
        && !name.contains(&['/', '\\'][..])
        && !name.contains("..")
}
