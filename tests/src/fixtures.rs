#![cfg(test)]
use tfinv_core::inventory::{Group, Host, Inventory, Vars};

/// A trimmed state document in the layout `terraform show -json` produces.
pub const STATE: &str = r#"{
  "format_version": "1.0",
  "terraform_version": "1.7.5",
  "values": {
    "root_module": {
      "resources": [
        {
          "address": "ansible_host.web1",
          "mode": "managed",
          "type": "ansible_host",
          "name": "web1",
          "provider_name": "registry.terraform.io/ansible/ansible",
          "values": {
            "id": "web1",
            "name": "web1",
            "groups": ["web"],
            "variables": { "ip": "10.0.1.10/24", "os": "linux" },
            "enabled": true
          }
        },
        {
          "address": "ansible_host.bastion",
          "type": "ansible_host",
          "values": {
            "name": "bastion",
            "groups": [],
            "variables": { "ip": "10.0.0.2" },
            "metadata": { "owner": "ops" },
            "enabled": true
          }
        },
        {
          "address": "ansible_group.web",
          "type": "ansible_group",
          "values": {
            "name": "web",
            "children": ["canary"],
            "variables": { "tier": "frontend" },
            "hosts": ["web1", "web2"]
          }
        },
        {
          "address": "ansible_inventory.this",
          "type": "ansible_inventory",
          "values": { "variables": { "env": "test" } }
        }
      ],
      "child_modules": [
        {
          "address": "module.db",
          "resources": [
            {
              "address": "module.db.ansible_host.db1",
              "type": "ansible_host",
              "values": {
                "name": "db1",
                "groups": ["db"],
                "variables": { "ip": "10.0.2.10/24", "port": 5432 },
                "enabled": false
              }
            },
            {
              "address": "module.db.aws_instance.db1",
              "type": "aws_instance",
              "values": { "name": "db1", "private_ip": "10.0.2.10" }
            }
          ]
        }
      ]
    }
  }
}"#;

/// The inventory used by the cross-format parity checks.
pub fn parity_inventory() -> Inventory {
    let mut inv = Inventory::new();
    inv.add_vars(Vars::from([("env".to_string(), "test".to_string())]));
    inv.add_group(Group::new("web").with_var("tier", "frontend"));
    inv.add_host(
        Host::new("test1")
            .with_group("web")
            .with_var("ip", "192.168.1.10/24")
            .with_var("os", "linux"),
    );
    inv
}
