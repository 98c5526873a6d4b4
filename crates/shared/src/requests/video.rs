use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// `POST /api/video/generate`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VideoGenerationRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prompt: Option<String>,
    /// `t2v`, `i2v` or `r2v`.
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
    /// Free-form provider parameters (`image_url`, `reference_url`,
    /// `video_cfg`, ...), forwarded as-is.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub params: Option<Value>,
}

impl VideoGenerationRequest {
    pub fn new(prompt: impl Into<String>, mode: impl Into<String>) -> Self {
        Self {
            prompt: Some(prompt.into()),
            mode: Some(mode.into()),
            params: None,
        }
    }

    pub fn with_params(mut self, params: Map<String, Value>) -> Self {
        self.params = Some(Value::Object(params));
        self
    }
}

/// `GET /api/video/status?taskId=`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoStatusQuery {
    #[serde(default, rename = "taskId")]
    pub task_id: Option<String>,
}

/// `POST /api/video/edit`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoEditRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_path: Option<String>,
    /// A missing or `null` value means no options.
    #[serde(default, deserialize_with = "null_as_default")]
    pub options: VideoEditOptions,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Edit options as sent by the UI.
///
/// Unknown keys are kept in `extra` and ignored by the gateway.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoEditOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remove_audio: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub add_subtitles: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub watermark_path: Option<String>,
    /// e.g. `top-left`, `bottom-right`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub watermark_position: Option<String>,
    /// e.g. `1080p`, `1280x720`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_resolution: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_frame_rate: Option<f32>,
    /// Seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_limit: Option<u32>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// `POST /api/video/compliance`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplianceRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_path: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn generation_request_uses_type_key() {
        let req: VideoGenerationRequest = serde_json::from_value(json!({
            "prompt": "a cat surfing",
            "type": "t2v",
            "params": {"video_cfg": {"duration": 10}}
        }))
        .unwrap();
        assert_eq!(req.mode.as_deref(), Some("t2v"));
        assert_eq!(req.params.unwrap()["video_cfg"]["duration"], 10);
    }

    #[test]
    fn missing_fields_deserialize_as_none() {
        let req: VideoGenerationRequest = serde_json::from_value(json!({})).unwrap();
        assert!(req.prompt.is_none());
        assert!(req.mode.is_none());

        let edit: VideoEditRequest = serde_json::from_value(json!({"inputPath": "in.mp4"})).unwrap();
        assert_eq!(edit.input_path.as_deref(), Some("in.mp4"));
        assert!(edit.output_path.is_none());
        assert_eq!(edit.options, VideoEditOptions::default());
    }

    #[test]
    fn null_edit_options_mean_no_options() {
        let edit: VideoEditRequest = serde_json::from_value(json!({
            "inputPath": "a",
            "outputPath": "b",
            "options": null
        }))
        .unwrap();
        assert_eq!(edit.output_path.as_deref(), Some("b"));
        assert_eq!(edit.options, VideoEditOptions::default());
    }

    #[test]
    fn edit_options_keep_unknown_keys() {
        let options: VideoEditOptions = serde_json::from_value(json!({
            "removeAudio": true,
            "targetResolution": "720p",
            "colorGrade": "warm"
        }))
        .unwrap();
        assert_eq!(options.remove_audio, Some(true));
        assert_eq!(options.target_resolution.as_deref(), Some("720p"));
        assert_eq!(options.extra["colorGrade"], "warm");
    }
}
