//! Integration tests for the editing pages against in-memory and file stores.

use async_trait::async_trait;
use relay_admin_config::{
    ConfigError, ConfigResult, ConfigStore, DnsRule, DnsRulesPage, FileConfigStore, InboundPage,
    MemoryConfigStore, OutboundRoute, Protocol, RelayConfig, RoutesPage,
};
use relay_admin_editor::InsertPosition;
use relay_admin_fields::FieldEvent;
use relay_admin_test_utils::IsolatedConfigDir;
use serde_json::json;

/// Store whose updates always fail.
struct FailingStore {
    config: RelayConfig,
}

#[async_trait]
impl ConfigStore for FailingStore {
    async fn fetch(&self) -> ConfigResult<Option<RelayConfig>> {
        Ok(Some(self.config.clone()))
    }

    async fn update(&self, _config: &RelayConfig) -> ConfigResult<()> {
        Err(ConfigError::store_error("relay unreachable"))
    }
}

fn sample_config() -> RelayConfig {
    let mut config = RelayConfig::default();
    config.dns.servers = vec!["1.1.1.1".into(), "8.8.8.8".into()];
    config.dns.rules.push(DnsRule {
        domains: vec!["example.com".into()],
        server: "1.1.1.1".into(),
        disabled: false,
    });
    config.routes.push(OutboundRoute {
        tag: "lan".into(),
        protocol: Protocol::Direct,
        ip_cidrs: vec!["192.168.0.0/16".into()],
        enabled: true,
        ..OutboundRoute::default()
    });
    config
}

#[test_log::test(tokio::test)]
async fn test_empty_store_loads_one_draft_row() {
    let store = MemoryConfigStore::default();
    let page = RoutesPage::load(&store, InsertPosition::Back).await.unwrap();
    assert_eq!(page.editor().len(), 1);
    assert!(page.items().is_empty());
}

#[tokio::test]
async fn test_new_route_is_saved_only_once_set() {
    let store = MemoryConfigStore::new(Some(sample_config()));
    let mut page = RoutesPage::load(&store, InsertPosition::Front)
        .await
        .unwrap();

    page.editor_mut().add_row();
    page.save(&store).await.unwrap();
    assert_eq!(store.fetch().await.unwrap().unwrap().routes.len(), 1);

    let editor = page.editor_mut();
    editor.apply(0, "tag", FieldEvent::Input("proxy".into()));
    editor.apply(0, "protocol", FieldEvent::Choose(3));
    editor.apply(0, "address", FieldEvent::Input("203.0.113.7".into()));
    editor.apply(0, "port", FieldEvent::Input("8388".into()));
    editor.apply(0, "password", FieldEvent::Input("pw".into()));
    editor.apply(0, "ports", FieldEvent::TagEntry("443".into()));
    editor.apply(0, "ports", FieldEvent::TagConfirm);
    page.save(&store).await.unwrap();

    let saved = store.fetch().await.unwrap().unwrap();
    assert_eq!(saved.routes.len(), 2);
    let proxy = &saved.routes[0];
    assert_eq!(proxy.tag, "proxy");
    assert_eq!(proxy.protocol, Protocol::Shadowsocks);
    assert_eq!(proxy.address, "203.0.113.7");
    assert_eq!(proxy.port, Some(8388));
    assert_eq!(proxy.password, "pw");
    assert_eq!(proxy.ports, vec![443]);
    assert!(proxy.enabled);
    assert_eq!(saved.routes[1].tag, "lan");
    // other sections are untouched
    assert_eq!(saved.dns, sample_config().dns);
}

#[tokio::test]
async fn test_textarea_lines_become_list() {
    let store = MemoryConfigStore::new(Some(sample_config()));
    let mut page = RoutesPage::load(&store, InsertPosition::Back).await.unwrap();
    page.editor_mut().apply(
        0,
        "ip_cidrs",
        FieldEvent::Input("192.168.0.0/16\n\n 10.0.0.0/8 ".into()),
    );
    page.save(&store).await.unwrap();
    let saved = store.fetch().await.unwrap().unwrap();
    assert_eq!(saved.routes[0].ip_cidrs, vec!["192.168.0.0/16", "10.0.0.0/8"]);
}

#[tokio::test]
async fn test_failed_save_leaves_page_untouched() {
    let store = FailingStore {
        config: sample_config(),
    };
    let mut page = DnsRulesPage::load(&store, InsertPosition::Back)
        .await
        .unwrap();
    page.editor_mut().edit_row(0, "server", json!("8.8.8.8"));

    let err = page.save(&store).await.unwrap_err();
    assert!(matches!(err, ConfigError::Store { .. }));
    assert_eq!(page.base(), &sample_config());
    assert_eq!(page.items()[0].server, "8.8.8.8");
}

#[tokio::test]
async fn test_reload_with_empty_section_keeps_drafts() {
    let store = MemoryConfigStore::new(Some(RelayConfig::default()));
    let mut page = RoutesPage::load(&store, InsertPosition::Back).await.unwrap();
    page.editor_mut()
        .apply(0, "tag", FieldEvent::Input("partial".into()));

    page.reload(&store).await.unwrap();
    assert_eq!(page.editor().len(), 1);
    assert_eq!(page.editor().rows().next().unwrap().text("tag"), "partial");

    store.set(Some(sample_config())).await;
    page.reload(&store).await.unwrap();
    assert_eq!(page.editor().len(), 1);
    assert_eq!(page.editor().rows().next().unwrap().text("tag"), "lan");
}

#[tokio::test]
async fn test_dns_rule_keeps_unschematized_flag() {
    let mut config = sample_config();
    config.dns.rules[0].disabled = true;
    let store = MemoryConfigStore::new(Some(config));
    let mut page = DnsRulesPage::load(&store, InsertPosition::Back)
        .await
        .unwrap();
    page.editor_mut()
        .apply(0, "server", FieldEvent::Choose(1))
        .unwrap();
    page.save(&store).await.unwrap();

    let rule = &store.fetch().await.unwrap().unwrap().dns.rules[0];
    assert_eq!(rule.server, "8.8.8.8");
    assert!(rule.disabled);
}

#[tokio::test]
async fn test_inbound_page_round_trip_through_file() {
    let dir = IsolatedConfigDir::new().unwrap();
    let store = FileConfigStore::new(dir.file("relay.yaml"));
    let mut page = InboundPage::load(&store).await.unwrap();

    let editor = page.editor_mut();
    editor.apply("listen", FieldEvent::Input("0.0.0.0".into()));
    assert!(editor
        .apply("port", FieldEvent::Custom(json!("99999")))
        .is_none());
    editor.apply("port", FieldEvent::Custom(json!("7890")));
    editor.apply("sniffing", FieldEvent::Toggle(true));
    editor.apply("allowed_ports", FieldEvent::TagEntry("80".into()));
    editor.apply("allowed_ports", FieldEvent::TagConfirm);
    page.save(&store).await.unwrap();

    let saved = store.fetch().await.unwrap().unwrap();
    assert_eq!(saved.inbound.listen, "0.0.0.0");
    assert_eq!(saved.inbound.port, Some(7890));
    assert!(saved.inbound.sniffing);
    assert_eq!(saved.inbound.allowed_ports, vec![80]);

    let reloaded = InboundPage::load(&store).await.unwrap();
    assert_eq!(reloaded.item(), saved.inbound);
}
