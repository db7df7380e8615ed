mod support;

use support::spawn_endpoint;
use image::{Rgb, RgbImage};
use inspector::inspection::dispatcher::Dispatcher;
use inspector::inspection::media_codec::MediaCodec;
use inspector::utils::logging::InspectionEntry;

fn sample_jpeg() -> Vec<u8> {
    MediaCodec::encode_jpeg(&RgbImage::from_pixel(32, 32, Rgb([200, 10, 10])), 90).unwrap()
}

#[actix_web::test]
async fn parses_annotations_on_ok() {
    let endpoint = spawn_endpoint(200, r#"[{"class_id": 1, "rel_x": 0.5, "rel_y": 0.5, "width": 0.2, "height": 0.2}]"#);
    let dispatcher = Dispatcher::new(format!("{endpoint}/api/test"));
    let annotations = dispatcher.annotate(sample_jpeg()).await.unwrap();
    assert_eq!(annotations.len(), 1);
    assert_eq!(annotations[0].class_id, 1);
    assert_eq!(annotations[0].width, 0.2);
}

#[actix_web::test]
async fn server_error_is_a_status_error() {
    let endpoint = spawn_endpoint(500, "boom");
    let dispatcher = Dispatcher::new(format!("{endpoint}/api/test"));
    let result = dispatcher.annotate(sample_jpeg()).await;
    assert!(matches!(result, Err(InspectionEntry::EndpointStatusError(500))));
}

#[actix_web::test]
async fn only_200_counts_as_success() {
    let endpoint = spawn_endpoint(201, "[]");
    let dispatcher = Dispatcher::new(format!("{endpoint}/api/test"));
    let result = dispatcher.annotate(sample_jpeg()).await;
    assert!(matches!(result, Err(InspectionEntry::EndpointStatusError(201))));
}

#[actix_web::test]
async fn sends_jpeg_content_type() {
    // The stand-in answers 415 unless it receives a JPEG with the right header.
    let endpoint = spawn_endpoint(200, "[]");
    let dispatcher = Dispatcher::new(format!("{endpoint}/api/test"));
    assert!(dispatcher.annotate(sample_jpeg()).await.unwrap().is_empty());
    let result = dispatcher.annotate(b"not a jpeg".to_vec()).await;
    assert!(matches!(result, Err(InspectionEntry::EndpointStatusError(415))));
}

#[actix_web::test]
async fn malformed_body_is_a_parse_error() {
    let endpoint = spawn_endpoint(200, r#"{"boxes": []}"#);
    let dispatcher = Dispatcher::new(format!("{endpoint}/api/test"));
    let result = dispatcher.annotate(sample_jpeg()).await;
    assert!(matches!(result, Err(InspectionEntry::AnnotationParseError(_))));
}

#[actix_web::test]
async fn unreachable_endpoint_is_a_request_error() {
    let dispatcher = Dispatcher::new("http://127.0.0.1:1/api/test");
    let result = dispatcher.annotate(sample_jpeg()).await;
    assert!(matches!(result, Err(InspectionEntry::EndpointRequestError(_))));
}
