//! Steps that run once per document after dispatch, reading the deferred
//! values. They only add to the document; nothing already loaded is replaced.

use crate::constants::{DEFAULT_BASE_PATH, DEFAULT_HOST};
use crate::context::DeferredValues;
use crate::model::{Document, Paths, Server};

pub fn post_process(document: &mut Document, deferred: &DeferredValues) {
    make_servers(&mut document.servers, deferred);
    inherit_media_types(&mut document.paths, deferred);
}

/// One server per recorded scheme, in scheme order. No schemes, no servers.
pub fn make_servers(servers: &mut Vec<Server>, deferred: &DeferredValues) {
    let Some(schemes) = deferred.schemes() else {
        return;
    };
    let host = deferred.host().unwrap_or(DEFAULT_HOST);
    let base_path = deferred.base_path().unwrap_or(DEFAULT_BASE_PATH);

    for scheme in schemes {
        let url = format!("{scheme}://{host}{base_path}");
        log::debug!("synthesized server {url}");
        servers.push(Server::new(url));
    }
}

/// Fills operation `consumes`/`produces` that the operation left unset with
/// the document-wide lists.
pub fn inherit_media_types(paths: &mut Paths, deferred: &DeferredValues) {
    let consumes = deferred.consumes();
    let produces = deferred.produces();
    if consumes.is_none() && produces.is_none() {
        return;
    }

    for operation in paths.operations_mut() {
        if operation.consumes.is_none() {
            operation.consumes = consumes.map(<[String]>::to_vec);
        }
        if operation.produces.is_none() {
            operation.produces = produces.map(<[String]>::to_vec);
        }
    }
}
