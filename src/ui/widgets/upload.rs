use dioxus::prelude::*;
use rfd::FileDialog;

use crate::app::AppCtx;
use crate::infra::api::upload;

/// Image picker + uploader: picks local files through the native dialog,
/// pushes them to the upload endpoint and keeps the stored URLs.
#[component]
pub fn UploadImage(mut images: Signal<Vec<String>>, limit: Option<usize>) -> Element {
    let ctx = use_context::<AppCtx>();
    let mut busy = use_signal(|| false);
    let limit = limit.unwrap_or(5);
    let current = images();
    let full = current.len() >= limit;

    rsx! {
        div { style: "display: flex; flex-direction: column; gap: 8px;",
            div { style: "display: flex; gap: 8px; flex-wrap: wrap;",
                {current.iter().enumerate().map(|(idx, url)| {
                    let url = url.clone();
                    rsx!(
                        div { style: "position: relative; width: 72px; height: 72px; border: 1px solid #ddd; border-radius: 6px; overflow: hidden;",
                            img {
                                style: "width: 100%; height: 100%; object-fit: cover;",
                                src: "{url}",
                            }
                            button {
                                style: "position: absolute; top: 2px; right: 2px; border: none; background: rgba(0,0,0,0.5); color: #fff; border-radius: 50%; width: 18px; height: 18px; line-height: 16px; cursor: pointer; padding: 0;",
                                onclick: move |_| {
                                    images.write().remove(idx);
                                },
                                "×"
                            }
                        }
                    )
                })}
            }
            button {
                style: "border: 1px dashed #bbb; background: #fafafa; padding: 6px 12px; border-radius: 6px; cursor: pointer; align-self: flex-start;",
                disabled: busy() || full,
                onclick: move |_| {
                    let Some(files) = FileDialog::new()
                        .add_filter("图片", &["png", "jpg", "jpeg", "webp"])
                        .pick_files()
                    else {
                        return;
                    };
                    let client = ctx.client.clone();
                    let toasts = ctx.toasts;
                    busy.set(true);
                    spawn(async move {
                        match upload::upload_files(&client, files).await {
                            Ok(urls) => {
                                let mut list = images.write();
                                for url in urls {
                                    if list.len() < limit {
                                        list.push(url);
                                    }
                                }
                            }
                            Err(err) => {
                                log::error!("image upload failed: {err}");
                                toasts.error("图片上传失败");
                            }
                        }
                        busy.set(false);
                    });
                },
                if busy() { "上传中…" } else { "选择图片" }
            }
        }
    }
}
