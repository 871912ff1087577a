use std::{
    fs,
    path::{Path, PathBuf},
};

use tagmap_boundary::GraphDataResponse;
use tagmap_core::{dataset::RawDataset, CourseId, GatewayError, GraphDataGateway};

/// Reads the graph data of a course from a JSON file.
///
/// The file of a course is `course-<id>.json` inside of the
/// data directory unless an explicit file has been given.
#[derive(Debug, Clone)]
pub struct JsonFileGateway {
    dir: PathBuf,
    file: Option<PathBuf>,
}

impl JsonFileGateway {
    pub fn new<P: Into<PathBuf>>(dir: P) -> Self {
        Self {
            dir: dir.into(),
            file: None,
        }
    }

    /// Always read the given file regardless of the requested course.
    pub fn from_file<P: Into<PathBuf>>(file: P) -> Self {
        let file = file.into();
        let dir = file.parent().map(Path::to_path_buf).unwrap_or_default();
        Self {
            dir,
            file: Some(file),
        }
    }

    pub fn path(&self, course_id: CourseId) -> PathBuf {
        self.file
            .clone()
            .unwrap_or_else(|| self.dir.join(format!("course-{course_id}.json")))
    }
}

impl GraphDataGateway for JsonFileGateway {
    fn graph_data(&self, course_id: CourseId) -> Result<RawDataset, GatewayError> {
        let path = self.path(course_id);
        log::debug!("Read graph data of course {course_id} from {}", path.display());
        let json = fs::read_to_string(&path)
            .map_err(|err| GatewayError::Fetch(format!("{}: {err}", path.display())))?;
        let response: GraphDataResponse = serde_json::from_str(&json)
            .map_err(|err| GatewayError::Malformed(format!("{}: {err}", path.display())))?;
        let data = response
            .into_result()
            .map_err(|err| GatewayError::Remote(err.message))?;
        Ok(data.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    fn temp_dir(name: &str) -> PathBuf {
        let dir = env::temp_dir().join(format!("tagmap-{name}-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn read_course_file() {
        let dir = temp_dir("read");
        fs::write(
            dir.join("course-7.json"),
            r#"{"resources":[{"id":"R1","name":"n","url":"u","tags":["x"]}],"questions":[]}"#,
        )
        .unwrap();
        let raw = JsonFileGateway::new(&dir).graph_data(7).unwrap();
        assert_eq!(raw.resources.len(), 1);
        assert_eq!(raw.resources[0].tags[0].as_str(), "x");
        assert!(raw.questions.is_empty());
    }

    #[test]
    fn missing_file() {
        let dir = temp_dir("missing");
        let err = JsonFileGateway::new(&dir).graph_data(404).unwrap_err();
        assert!(matches!(err, GatewayError::Fetch(_)));
    }

    #[test]
    fn missing_item_list() {
        let dir = temp_dir("malformed");
        let file = dir.join("broken.json");
        fs::write(&file, r#"{"resources":[]}"#).unwrap();
        let err = JsonFileGateway::from_file(&file).graph_data(1).unwrap_err();
        assert!(matches!(err, GatewayError::Malformed(_)));
    }

    #[test]
    fn host_error() {
        let dir = temp_dir("remote");
        let file = dir.join("error.json");
        fs::write(&file, r#"{"error":{"exception":{"message":"denied"}}}"#).unwrap();
        let err = JsonFileGateway::from_file(&file).graph_data(1).unwrap_err();
        assert!(matches!(err, GatewayError::Remote(msg) if msg == "denied"));
    }
}
