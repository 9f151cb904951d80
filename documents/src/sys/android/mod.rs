use std::path::PathBuf;

use jni::JNIEnv;
use jni::objects::JObject;
use log::warn;

/// Resolve the documents directory from an Android `Context`.
///
/// Android has no user-visible documents sandbox; the app files directory
/// is the closest equivalent.
pub fn documents_dir_with_context(env: &mut JNIEnv, context: &JObject) -> Option<PathBuf> {
    match query_files_dir(env, context) {
        Ok(path) => Some(PathBuf::from(path)),
        Err(e) => {
            warn!("error resolving documents dir: {e}");
            None
        }
    }
}

fn query_files_dir(env: &mut JNIEnv, context: &JObject) -> jni::errors::Result<String> {
    let dir = env
        .call_method(context, "getFilesDir", "()Ljava/io/File;", &[])?
        .l()?;

    let path = env
        .call_method(&dir, "getAbsolutePath", "()Ljava/lang/String;", &[])?
        .l()?;

    let path: String = env.get_string((&path).into())?.into();
    Ok(path)
}

/// Without a `Context` the sandbox cannot be resolved.
pub fn documents_dir() -> Option<PathBuf> {
    warn!("documents_dir requires an Android Context; use dir_with_context");
    None
}
