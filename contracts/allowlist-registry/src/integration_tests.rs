#[cfg(test)]
mod tests {
    use crate::msg::*;
    use crate::ContractError;

    use cosmwasm_std::{Addr, Empty};
    use cw_multi_test::{App, Contract, ContractWrapper, Executor};

    const CREATOR: &str = "creator";
    const OTHER_ADMIN: &str = "other_admin";

    pub fn registry_contract() -> Box<dyn Contract<Empty>> {
        let contract = ContractWrapper::new(
            crate::contract::execute,
            crate::contract::instantiate,
            crate::contract::query,
        );
        Box::new(contract)
    }

    fn instantiate_registry(app: &mut App, members: Vec<String>) -> Addr {
        let registry_id = app.store_code(registry_contract());
        app.instantiate_contract(
            registry_id,
            Addr::unchecked(CREATOR),
            &InstantiateMsg { members },
            &[],
            "allowlist-registry".to_string(),
            None,
        )
        .unwrap()
    }

    fn includes(app: &App, registry: &Addr, address: &str) -> bool {
        app.wrap()
            .query_wasm_smart(
                registry,
                &QueryMsg::IncludesAddress {
                    address: address.to_string(),
                },
            )
            .unwrap()
    }

    fn member_count(app: &App, registry: &Addr) -> u64 {
        app.wrap()
            .query_wasm_smart(registry, &QueryMsg::MemberCount {})
            .unwrap()
    }

    #[test]
    fn init_dedupes_members() {
        let members = vec![
            "addr0001".to_string(),
            "addr0002".to_string(),
            "addr0002".to_string(),
            "addr0003".to_string(),
        ];

        let mut app = App::default();
        let registry = instantiate_registry(&mut app, members);

        let admin: Addr = app
            .wrap()
            .query_wasm_smart(&registry, &QueryMsg::Admin {})
            .unwrap();
        assert_eq!(admin, Addr::unchecked(CREATOR));

        assert_eq!(member_count(&app, &registry), 3);
        assert!(includes(&app, &registry, "addr0001"));
        assert!(!includes(&app, &registry, "addr0009"));
    }

    #[test]
    fn add_members_is_idempotent() {
        let mut app = App::default();
        let registry = instantiate_registry(&mut app, vec!["addr0001".to_string()]);

        let msg = ExecuteMsg::AddMembers {
            members: vec!["addr0001".to_string(), "addr0002".to_string()],
        };
        let res = app.execute_contract(Addr::unchecked(CREATOR), registry.clone(), &msg, &[]);
        assert!(res.is_ok());
        assert_eq!(member_count(&app, &registry), 2);

        // repopulating with the same list leaves the registry unchanged
        let msg = ExecuteMsg::AddMembers {
            members: vec!["addr0001".to_string(), "addr0002".to_string()],
        };
        let res = app.execute_contract(Addr::unchecked(CREATOR), registry.clone(), &msg, &[]);
        assert!(res.is_ok());
        assert_eq!(member_count(&app, &registry), 2);
        assert!(includes(&app, &registry, "addr0002"));
    }

    #[test]
    fn add_members_requires_admin() {
        let mut app = App::default();
        let registry = instantiate_registry(&mut app, vec![]);

        let msg = ExecuteMsg::AddMembers {
            members: vec!["addr0001".to_string()],
        };
        let err = app
            .execute_contract(Addr::unchecked("rando"), registry.clone(), &msg, &[])
            .unwrap_err();
        assert_eq!(
            err.downcast::<ContractError>().unwrap().to_string(),
            ContractError::AccessDenied {}.to_string()
        );
        assert_eq!(member_count(&app, &registry), 0);
    }

    #[test]
    fn remove_members() {
        let mut app = App::default();
        let registry = instantiate_registry(
            &mut app,
            vec!["addr0001".to_string(), "addr0002".to_string()],
        );

        let msg = ExecuteMsg::RemoveMembers {
            members: vec!["addr0001".to_string()],
        };
        let res = app.execute_contract(Addr::unchecked(CREATOR), registry.clone(), &msg, &[]);
        assert!(res.is_ok());
        assert_eq!(member_count(&app, &registry), 1);
        assert!(!includes(&app, &registry, "addr0001"));

        // removing an unknown member errors
        let msg = ExecuteMsg::RemoveMembers {
            members: vec!["addr0009".to_string()],
        };
        let err = app
            .execute_contract(Addr::unchecked(CREATOR), registry.clone(), &msg, &[])
            .unwrap_err();
        assert!(err
            .downcast::<ContractError>()
            .unwrap()
            .to_string()
            .contains("MemberNotFound"));
    }

    #[test]
    fn update_admin() {
        let mut app = App::default();
        let registry = instantiate_registry(&mut app, vec![]);

        let msg = ExecuteMsg::UpdateAdmin {
            new_admin: OTHER_ADMIN.to_string(),
        };
        let res = app.execute_contract(Addr::unchecked(CREATOR), registry.clone(), &msg, &[]);
        assert!(res.is_ok());

        let admin: Addr = app
            .wrap()
            .query_wasm_smart(&registry, &QueryMsg::Admin {})
            .unwrap();
        assert_eq!(admin, Addr::unchecked(OTHER_ADMIN));

        // old admin lost the gate
        let msg = ExecuteMsg::AddMembers {
            members: vec!["addr0001".to_string()],
        };
        let res = app.execute_contract(Addr::unchecked(CREATOR), registry, &msg, &[]);
        assert!(res.is_err());
    }
}
