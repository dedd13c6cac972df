//! 设置表单提交流程测试
//!
//! 测试"先校验、后保存、再通知"的提交顺序和
//! 校验失败时不产生写入的约束

use feishu_export::app::config::store::{
    CONNECTION_CONFIG_KEY, EXPORT_FORMAT_CONFIG_KEY,
};
use feishu_export::ui::forms::{
    ConnectionForm, ExportFormatForm, SettingsForm,
    SubmitError,
};
use feishu_export::{
    ConfigStore, ConnectionConfig, DocumentFormat,
    ExportFormatConfig, KvStore, MemoryKvStore,
};

fn valid_form() -> SettingsForm {
    SettingsForm {
        connection: ConnectionForm {
            app_id: "cli_a1b2c3d4e5".to_string(),
            app_secret: "secret1234567890".to_string(),
            endpoint: "https://open.feishu.cn/open-apis"
                .to_string(),
        },
        formats: ExportFormatForm::default(),
    }
}

#[test]
fn test_valid_submit_writes_both_records() {
    let mut store =
        ConfigStore::new(MemoryKvStore::new());
    let form = valid_form();

    let saved = form.try_submit(&mut store).unwrap();
    assert_eq!(saved.app_id, "cli_a1b2c3d4e5");

    assert!(store
        .store()
        .get(CONNECTION_CONFIG_KEY)
        .unwrap()
        .is_some());
    assert!(store
        .store()
        .get(EXPORT_FORMAT_CONFIG_KEY)
        .unwrap()
        .is_some());
}

#[test]
fn test_short_app_id_rejected_before_any_write() {
    let mut store =
        ConfigStore::new(MemoryKvStore::new());
    let mut form = valid_form();
    form.connection.app_id = "short".to_string();

    let result = form.try_submit(&mut store);
    match result {
        Err(SubmitError::Invalid(errors)) => {
            assert!(errors.app_id.is_some());
            assert!(errors.app_secret.is_none());
        }
        other => panic!(
            "expected validation failure, got {other:?}"
        ),
    }

    // 校验失败时存储内容不变
    assert!(store
        .store()
        .get(CONNECTION_CONFIG_KEY)
        .unwrap()
        .is_none());
    assert!(store
        .store()
        .get(EXPORT_FORMAT_CONFIG_KEY)
        .unwrap()
        .is_none());
}

#[test]
fn test_malformed_endpoint_rejected() {
    let mut store =
        ConfigStore::new(MemoryKvStore::new());
    let mut form = valid_form();
    form.connection.endpoint =
        "open.feishu.cn".to_string();

    match form.try_submit(&mut store) {
        Err(SubmitError::Invalid(errors)) => {
            assert!(errors.endpoint.is_some());
        }
        other => panic!(
            "expected validation failure, got {other:?}"
        ),
    }
}

#[test]
fn test_submit_trims_whitespace() {
    let mut store =
        ConfigStore::new(MemoryKvStore::new());
    let mut form = valid_form();
    form.connection.app_id =
        "  cli_a1b2c3d4e5  ".to_string();

    let saved = form.try_submit(&mut store).unwrap();
    assert_eq!(saved.app_id, "cli_a1b2c3d4e5");
}

#[test]
fn test_modal_save_only_touches_format_key() {
    let mut store =
        ConfigStore::new(MemoryKvStore::new());
    let credentials = ConnectionConfig {
        app_id: "cli_a1b2c3d4e5".to_string(),
        app_secret: "secret1234567890".to_string(),
        endpoint: "https://open.feishu.cn/open-apis"
            .to_string(),
    };
    store.save_connection_config(&credentials).unwrap();
    let raw_before = store
        .store()
        .get(CONNECTION_CONFIG_KEY)
        .unwrap();

    // 弹窗入口：只保存导出格式
    let mut modal_form = ExportFormatForm::default();
    modal_form.doc = DocumentFormat::Pdf;
    modal_form.save(&mut store).unwrap();

    assert_eq!(
        store.store().get(CONNECTION_CONFIG_KEY).unwrap(),
        raw_before,
        "modal save must not rewrite credentials"
    );
    assert_eq!(
        store.load_export_format_config().doc,
        DocumentFormat::Pdf
    );
}

#[test]
fn test_reset_restores_defaults_without_writing() {
    let mut store =
        ConfigStore::new(MemoryKvStore::new());
    let mut form = valid_form();
    form.try_submit(&mut store).unwrap();

    form.reset_defaults();
    assert_eq!(form.connection.app_id, "");
    assert_eq!(
        form.connection.endpoint,
        "https://open.feishu.cn/open-apis"
    );
    assert_eq!(
        form.formats.to_config(),
        ExportFormatConfig::default()
    );

    // 重置只影响表单，不影响已保存的记录
    assert_eq!(
        store.load_connection_config().app_id,
        "cli_a1b2c3d4e5"
    );
}

#[test]
fn test_form_round_trip_through_store() {
    let mut store =
        ConfigStore::new(MemoryKvStore::new());
    let form = valid_form();
    form.try_submit(&mut store).unwrap();

    let reloaded = SettingsForm::load(&store);
    assert_eq!(
        reloaded.connection.app_id,
        form.connection.app_id
    );
    assert_eq!(
        reloaded.connection.endpoint,
        form.connection.endpoint
    );
    assert_eq!(
        reloaded.formats.to_config(),
        form.formats.to_config()
    );
}
