//! Concurrent ingest, search and clear against one shared handle.

use std::collections::HashSet;
use std::sync::Arc;
use std::thread;

use semsearch_core::{HashingEmbedder, Semsearch, SemsearchError};

const WRITERS: usize = 4;
const DOCS_PER_WRITER: usize = 25;

#[test]
fn parallel_ingest_and_search_stay_consistent() {
    let engine = Arc::new(Semsearch::new(HashingEmbedder::with_dimension(64).unwrap()));

    thread::scope(|scope| {
        for writer in 0..WRITERS {
            let engine = Arc::clone(&engine);
            scope.spawn(move || {
                for i in 0..DOCS_PER_WRITER {
                    let text = format!("writer {writer} document {i} shared vocabulary");
                    engine
                        .ingest(&format!("w{writer}-{i}.txt"), text.as_bytes())
                        .unwrap();
                }
            });
        }
        for _ in 0..2 {
            let engine = Arc::clone(&engine);
            scope.spawn(move || {
                for _ in 0..50 {
                    match engine.search("shared vocabulary", 5) {
                        Ok(hits) => {
                            assert!(hits.len() <= 5);
                            for (i, hit) in hits.iter().enumerate() {
                                assert_eq!(hit.rank, i + 1);
                                assert!(hit.similarity_score > 0.0);
                                assert!(hit.similarity_score <= 1.0);
                            }
                            assert!(hits
                                .windows(2)
                                .all(|w| w[0].similarity_score >= w[1].similarity_score));
                        }
                        Err(SemsearchError::NoDocuments) => {}
                        Err(other) => panic!("unexpected search error: {other}"),
                    }
                }
            });
        }
    });

    let total = WRITERS * DOCS_PER_WRITER;
    let stats = engine.stats().unwrap();
    assert_eq!(stats.total_documents, total);
    assert!(stats.index_ready);

    let hits = engine.search("shared vocabulary", total).unwrap();
    let ids: HashSet<_> = hits.iter().map(|h| h.document_id).collect();
    assert_eq!(ids.len(), total);
}

#[test]
fn clear_racing_with_search_never_exposes_partial_state() {
    let engine = Arc::new(Semsearch::new(HashingEmbedder::with_dimension(32).unwrap()));

    thread::scope(|scope| {
        let writer = Arc::clone(&engine);
        scope.spawn(move || {
            for round in 0..20 {
                for i in 0..5 {
                    writer
                        .ingest("doc.txt", format!("round {round} item {i}").as_bytes())
                        .unwrap();
                }
                writer.clear().unwrap();
            }
        });

        let reader = Arc::clone(&engine);
        scope.spawn(move || {
            for _ in 0..200 {
                match reader.search("round item", 3) {
                    Ok(hits) => {
                        assert!(!hits.is_empty());
                        assert!(hits.len() <= 3);
                    }
                    Err(SemsearchError::NoDocuments) => {}
                    Err(other) => panic!("unexpected search error: {other}"),
                }
                let stats = reader.stats().unwrap();
                assert_eq!(stats.index_ready, stats.total_documents > 0);
                assert_eq!(stats.document_names.len(), stats.total_documents);
            }
        });
    });

    assert_eq!(engine.count().unwrap(), 0);
}
