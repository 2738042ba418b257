//! BSON <-> movie conversion helpers.
//!
//! Incoming JSON is read as MongoDB Extended JSON, so `{"$date": ...}` style
//! values round-trip with the relaxed form used on the way out.

use mongodb::bson::{oid::ObjectId, Bson, Document};
use reelstore_domain::{Movie, MovieFields, MovieId, ID_FIELD};
use serde_json::Value;

use crate::infrastructure::ports::RepoError;

pub fn object_id(id: &MovieId) -> Result<ObjectId, RepoError> {
    ObjectId::parse_str(id.as_str()).map_err(RepoError::serialization)
}

pub fn movie_id(oid: &ObjectId) -> Result<MovieId, RepoError> {
    MovieId::parse(&oid.to_hex()).map_err(RepoError::serialization)
}

pub fn fields_to_document(fields: &MovieFields) -> Result<Document, RepoError> {
    Document::try_from(fields.clone()).map_err(RepoError::serialization)
}

/// Converts a stored document into a movie. The `_id` must be an ObjectId.
pub fn document_to_movie(mut document: Document) -> Result<Movie, RepoError> {
    let id = match document.remove(ID_FIELD) {
        Some(Bson::ObjectId(oid)) => movie_id(&oid)?,
        Some(other) => {
            return Err(RepoError::serialization(format!(
                "expected ObjectId in _id, found {:?}",
                other.element_type()
            )))
        }
        None => return Err(RepoError::serialization("stored document has no _id")),
    };

    match Bson::Document(document).into_relaxed_extjson() {
        Value::Object(fields) => Ok(Movie::new(id, fields)),
        other => Err(RepoError::serialization(format!(
            "document converted to non-object JSON: {other}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::{doc, DateTime};
    use serde_json::json;

    #[test]
    fn stored_document_becomes_movie() {
        let oid = ObjectId::parse_str("573a1391f29313caabcd956e").unwrap();
        let movie = document_to_movie(doc! {
            "_id": oid,
            "title": "The Avengers",
            "year": 2012_i32,
            "cast": ["Robert Downey Jr.", "Chris Evans"],
        })
        .unwrap();

        assert_eq!(movie.id.as_str(), "573a1391f29313caabcd956e");
        assert_eq!(
            serde_json::to_value(&movie).unwrap(),
            json!({
                "_id": "573a1391f29313caabcd956e",
                "title": "The Avengers",
                "year": 2012,
                "cast": ["Robert Downey Jr.", "Chris Evans"],
            })
        );
    }

    #[test]
    fn dates_use_relaxed_extended_json() {
        let movie = document_to_movie(doc! {
            "_id": ObjectId::new(),
            "released": DateTime::from_millis(0),
        })
        .unwrap();
        let released = movie.fields.get("released").and_then(Value::as_object).unwrap();
        assert!(released.contains_key("$date"));
    }

    #[test]
    fn missing_or_foreign_id_is_rejected() {
        assert!(document_to_movie(doc! {"title": "x"}).is_err());
        assert!(document_to_movie(doc! {"_id": "plain-string"}).is_err());
    }

    #[test]
    fn fields_convert_to_bson() {
        let fields = match json!({"title": "Heat", "year": 1995, "tags": ["crime"]}) {
            Value::Object(map) => map,
            _ => unreachable!(),
        };
        let document = fields_to_document(&fields).unwrap();
        assert_eq!(document.get_str("title").unwrap(), "Heat");
        assert_eq!(document.get_array("tags").unwrap().len(), 1);
    }

    #[test]
    fn id_conversion_is_lossless() {
        let id = MovieId::parse("000000000000000000000000").unwrap();
        let oid = object_id(&id).unwrap();
        assert_eq!(movie_id(&oid).unwrap(), id);
    }
}
