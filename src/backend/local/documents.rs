//! Local document collections with realtime listeners
//!
//! Each collection is one JSON file holding its documents in creation order.
//! A write is persisted before it becomes visible, then every listener of that
//! collection receives the full new snapshot.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::backend::{CollectionPath, Document, Fields, SnapshotListener, Subscription};
use crate::config::WeddingPaths;
use crate::error::{WeddingError, WeddingResult};

use super::file_io::{read_json, write_json_atomic};
use super::lock_error;

/// On-disk layout of a collection file
#[derive(Debug, Default, Serialize, Deserialize)]
struct CollectionData {
    documents: Vec<Document>,
}

type ListenerMap = HashMap<u64, (CollectionPath, SnapshotListener)>;

/// Repository of every collection the local backend has touched
pub struct LocalDocuments {
    paths: WeddingPaths,
    collections: RwLock<HashMap<CollectionPath, Vec<Document>>>,
    listeners: Arc<RwLock<ListenerMap>>,
    next_listener: AtomicU64,
}

impl LocalDocuments {
    /// Create a repository rooted at the data directory
    pub fn new(paths: WeddingPaths) -> Self {
        Self {
            paths,
            collections: RwLock::new(HashMap::new()),
            listeners: Arc::new(RwLock::new(HashMap::new())),
            next_listener: AtomicU64::new(0),
        }
    }

    fn file_for(&self, path: &CollectionPath) -> PathBuf {
        let segments = path.segments();
        let segments: Vec<&str> = segments.iter().map(String::as_str).collect();
        self.paths.collection_file(&segments)
    }

    /// Current contents of a collection, loading it from disk on first use
    pub fn snapshot(&self, path: &CollectionPath) -> WeddingResult<Vec<Document>> {
        {
            let collections = self.collections.read().map_err(lock_error)?;
            if let Some(documents) = collections.get(path) {
                return Ok(documents.clone());
            }
        }

        let mut collections = self.collections.write().map_err(lock_error)?;
        let documents = self.loaded(&mut collections, path)?;
        Ok(documents.clone())
    }

    fn loaded<'a>(
        &self,
        collections: &'a mut HashMap<CollectionPath, Vec<Document>>,
        path: &CollectionPath,
    ) -> WeddingResult<&'a mut Vec<Document>> {
        if !collections.contains_key(path) {
            let data: CollectionData = read_json(self.file_for(path))?;
            tracing::debug!(collection = %path, count = data.documents.len(), "Loaded collection");
            collections.insert(path.clone(), data.documents);
        }
        collections
            .get_mut(path)
            .ok_or_else(|| WeddingError::Storage(format!("Collection {} failed to load", path)))
    }

    /// Register a listener and hand it the current snapshot
    ///
    /// The collection stays write-locked until the first snapshot is
    /// delivered, so no commit can slip in between.
    pub fn subscribe(
        &self,
        path: &CollectionPath,
        listener: SnapshotListener,
    ) -> WeddingResult<Subscription> {
        let mut collections = self.collections.write().map_err(lock_error)?;
        let snapshot = self.loaded(&mut collections, path)?;

        let key = self.next_listener.fetch_add(1, Ordering::Relaxed);
        self.listeners
            .write()
            .map_err(lock_error)?
            .insert(key, (path.clone(), Arc::clone(&listener)));
        tracing::debug!(collection = %path, listener = key, "Subscribed");

        listener(snapshot.as_slice());
        drop(collections);

        let listeners = Arc::clone(&self.listeners);
        Ok(Subscription::new(path.to_string(), move || {
            if let Ok(mut listeners) = listeners.write() {
                listeners.remove(&key);
            }
        }))
    }

    /// Append a document with a fresh id
    pub fn create(&self, path: &CollectionPath, fields: Fields) -> WeddingResult<String> {
        let id = Uuid::new_v4().to_string();
        let document = Document {
            id: id.clone(),
            fields,
        };
        self.commit(path, move |documents| {
            documents.push(document);
            Ok(())
        })?;
        Ok(id)
    }

    /// Merge fields into a document
    pub fn update(&self, path: &CollectionPath, id: &str, fields: Fields) -> WeddingResult<()> {
        self.commit(path, |documents| {
            let document = documents
                .iter_mut()
                .find(|d| d.id == id)
                .ok_or_else(|| WeddingError::document_not_found(id))?;
            for (name, value) in fields {
                document.fields.insert(name, value);
            }
            Ok(())
        })
    }

    /// Remove a document
    pub fn delete(&self, path: &CollectionPath, id: &str) -> WeddingResult<()> {
        self.commit(path, |documents| {
            let index = documents
                .iter()
                .position(|d| d.id == id)
                .ok_or_else(|| WeddingError::document_not_found(id))?;
            documents.remove(index);
            Ok(())
        })
    }

    /// Apply a change to a copy, persist it, swap it in, then notify
    ///
    /// Listeners run while the collection is still write-locked, so they see
    /// snapshots in commit order. They must not call back into this store.
    fn commit<F>(&self, path: &CollectionPath, change: F) -> WeddingResult<()>
    where
        F: FnOnce(&mut Vec<Document>) -> WeddingResult<()>,
    {
        let mut collections = self.collections.write().map_err(lock_error)?;
        let documents = self.loaded(&mut collections, path)?;

        let mut updated = documents.clone();
        change(&mut updated)?;

        let data = CollectionData {
            documents: updated,
        };
        write_json_atomic(self.file_for(path), &data)?;
        *documents = data.documents;

        self.notify(path, documents.as_slice())
    }

    fn notify(&self, path: &CollectionPath, snapshot: &[Document]) -> WeddingResult<()> {
        let listeners: Vec<SnapshotListener> = self
            .listeners
            .read()
            .map_err(lock_error)?
            .values()
            .filter(|(listened, _)| listened == path)
            .map(|(_, listener)| Arc::clone(listener))
            .collect();

        tracing::debug!(
            collection = %path,
            listeners = listeners.len(),
            documents = snapshot.len(),
            "Emitting snapshot"
        );
        for listener in listeners {
            listener(snapshot);
        }
        Ok(())
    }

    /// Number of registered listeners across all collections
    pub fn listener_count(&self) -> usize {
        self.listeners.read().map(|l| l.len()).unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::Collection;
    use crate::models::UserId;
    use serde_json::json;
    use std::sync::Mutex;
    use tempfile::TempDir;

    fn setup() -> (TempDir, LocalDocuments, CollectionPath) {
        let dir = TempDir::new().unwrap();
        let docs = LocalDocuments::new(WeddingPaths::with_base_dir(dir.path().to_path_buf()));
        let path = CollectionPath::new(UserId::new(), Collection::Expenses);
        (dir, docs, path)
    }

    fn fields(value: serde_json::Value) -> Fields {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_create_persists_in_order() {
        let (dir, docs, path) = setup();
        let first = docs.create(&path, fields(json!({"description": "Hall"}))).unwrap();
        let second = docs.create(&path, fields(json!({"description": "Cake"}))).unwrap();

        let reopened = LocalDocuments::new(WeddingPaths::with_base_dir(dir.path().to_path_buf()));
        let snapshot = reopened.snapshot(&path).unwrap();
        let ids: Vec<_> = snapshot.iter().map(|d| d.id.clone()).collect();
        assert_eq!(ids, vec![first, second]);
    }

    #[test]
    fn test_update_merges_fields() {
        let (_dir, docs, path) = setup();
        let id = docs
            .create(&path, fields(json!({"description": "Hall", "createdAt": "t0"})))
            .unwrap();
        docs.update(&path, &id, fields(json!({"description": "Barn"})))
            .unwrap();

        let doc = &docs.snapshot(&path).unwrap()[0];
        assert_eq!(doc.fields["description"], json!("Barn"));
        assert_eq!(doc.fields["createdAt"], json!("t0"));
    }

    #[test]
    fn test_update_and_delete_missing() {
        let (_dir, docs, path) = setup();
        assert!(docs.update(&path, "nope", Fields::new()).unwrap_err().is_not_found());
        assert!(docs.delete(&path, "nope").unwrap_err().is_not_found());
    }

    #[test]
    fn test_listeners_receive_snapshots_until_released() {
        let (_dir, docs, path) = setup();
        let sizes = Arc::new(Mutex::new(Vec::new()));

        let sink = Arc::clone(&sizes);
        let sub = docs
            .subscribe(
                &path,
                Arc::new(move |snapshot: &[Document]| sink.lock().unwrap().push(snapshot.len())),
            )
            .unwrap();
        assert_eq!(docs.listener_count(), 1);

        let id = docs.create(&path, Fields::new()).unwrap();
        docs.delete(&path, &id).unwrap();
        sub.unsubscribe();
        assert_eq!(docs.listener_count(), 0);
        docs.create(&path, Fields::new()).unwrap();

        assert_eq!(*sizes.lock().unwrap(), vec![0, 1, 0]);
    }

    #[test]
    fn test_concurrent_writers_deliver_latest_snapshot_last() {
        let (_dir, docs, path) = setup();
        let docs = Arc::new(docs);
        let last = Arc::new(Mutex::new(0));

        let sink = Arc::clone(&last);
        let _sub = docs
            .subscribe(
                &path,
                Arc::new(move |snapshot: &[Document]| *sink.lock().unwrap() = snapshot.len()),
            )
            .unwrap();

        let writers: Vec<_> = (0..4)
            .map(|_| {
                let docs = Arc::clone(&docs);
                let path = path.clone();
                std::thread::spawn(move || {
                    for _ in 0..10 {
                        docs.create(&path, Fields::new()).unwrap();
                    }
                })
            })
            .collect();
        for writer in writers {
            writer.join().unwrap();
        }

        assert_eq!(docs.snapshot(&path).unwrap().len(), 40);
        assert_eq!(*last.lock().unwrap(), 40);
    }

    #[test]
    fn test_listeners_scoped_to_collection() {
        let (_dir, docs, path) = setup();
        let other = CollectionPath::new(path.user(), Collection::Income);
        let calls = Arc::new(Mutex::new(0));

        let sink = Arc::clone(&calls);
        let _sub = docs
            .subscribe(&other, Arc::new(move |_: &[Document]| *sink.lock().unwrap() += 1))
            .unwrap();
        docs.create(&path, Fields::new()).unwrap();

        assert_eq!(*calls.lock().unwrap(), 1);
    }
}
